pub mod profile;
pub mod record;
pub mod summary;
pub mod view;

#[cfg(test)]
#[path = "../../tests/src_inline/model/record.rs"]
mod tests;
