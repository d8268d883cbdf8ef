use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SuggestionParams {
    #[serde(default)]
    pub q: String,
}
