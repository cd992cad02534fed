pub mod build_histogram;

pub use build_histogram::BuildHistogramUseCase;
