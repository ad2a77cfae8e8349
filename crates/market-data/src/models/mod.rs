mod quote;

pub use quote::Quote;
