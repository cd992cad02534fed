use serde::Serialize;
use tweetgram_domain::Histogram;

/// Hour-of-day to tweet count, serialized as a JSON object. An empty
/// histogram renders as `{}`, never `[]`.
#[derive(Serialize, Debug, Clone)]
#[serde(transparent)]
pub struct HistogramResponse(Histogram);

impl From<Histogram> for HistogramResponse {
    fn from(histogram: Histogram) -> Self {
        Self(histogram)
    }
}
