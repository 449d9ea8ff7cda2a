// Use cases layer: list and submit workflows over the score store port.

pub mod list_scores;
pub mod submit_score;

#[cfg(test)]
pub(crate) mod test_support;
