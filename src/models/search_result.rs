use derive_getters::Getters;
use derive_new::new;

#[derive(Clone, Debug, Eq, Getters, PartialEq, new)]
pub struct SearchResult {
    symbol: String,
    company: String,
}
