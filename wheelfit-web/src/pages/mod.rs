mod fitment;

pub use fitment::FitmentPage;
