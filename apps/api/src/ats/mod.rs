// ATS résumé check: keyword tables, the scoring engine, grade bands and
// builder progress. The engine is pure; handlers are the only I/O edge.

pub mod grade;
pub mod handlers;
pub mod keywords;
pub mod progress;
pub mod scoring;
