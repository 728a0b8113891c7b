pub mod realizer;
pub mod report;
pub mod text;
