mod helper_functions;
#[cfg(test)]
pub(crate) mod testing;

pub use helper_functions::looks_like_text;
