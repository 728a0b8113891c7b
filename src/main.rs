use anyhow::Result;
use emotion_dispatch::config::{Config, OutputFormat};
use emotion_dispatch::kernel::event::{Event, InputEvent};
use emotion_dispatch::kernel::reactor::Reactor;
use emotion_dispatch::kernel::scheduler::SideEffect;
use emotion_dispatch::kernel::time::TICK_MS;
use emotion_dispatch::outputs::text::OUTPUT_ELEMENT_ID;
use serde_json::json;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

const SOURCE: &str = "Terminal";

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout carries only the output element
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = Config::from_env()?;
    tracing::info!(base_url = %config.base_url, "Emotion dispatcher ready. One line per request, EOF to quit.");

    let (tx, rx) = mpsc::channel(100);
    let mut reactor = Reactor::new(rx, tx, &config);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut cadence = tokio::time::interval(Duration::from_millis(TICK_MS));
    cadence.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(text) = line? else { break };
                // Typing into the field, then clicking run
                let mut events = reactor.drain_events();
                events.push(Event::Input(InputEvent::text(SOURCE, &text)));
                events.push(Event::Input(InputEvent::submit(SOURCE)));
                for effect in reactor.tick_step(events) {
                    present(effect, config.output_format)?;
                }
            }
            _ = cadence.tick() => {
                let events = reactor.drain_events();
                for effect in reactor.tick_step(events) {
                    present(effect, config.output_format)?;
                }
            }
        }
    }

    // EOF: let in-flight requests land before exiting
    let pending = reactor.state.in_flight().len();
    if pending > 0 {
        tracing::info!(pending, "Waiting for in-flight requests");
    }
    for effect in reactor.settle().await {
        present(effect, config.output_format)?;
    }
    reactor.dispatcher.wait_idle().await;

    let summary = reactor.telemetry.aggregate_session(reactor.tick.frame);
    tracing::info!(summary = %serde_json::to_string(&summary)?, "Session finished");
    Ok(())
}

fn present(effect: SideEffect, format: OutputFormat) -> Result<()> {
    match effect {
        SideEffect::Log(msg) => tracing::debug!("{}", msg),
        SideEffect::Render { content, report } => match format {
            OutputFormat::Text => println!("{}", content),
            OutputFormat::Json => {
                let line = match report {
                    Some(report) => serde_json::to_string(&report)?,
                    None => json!({ OUTPUT_ELEMENT_ID: content }).to_string(),
                };
                println!("{}", line);
            }
        },
    }
    Ok(())
}
