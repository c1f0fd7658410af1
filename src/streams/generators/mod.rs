mod gaussian;

pub use gaussian::GaussianGenerator;
