pub mod bs;
pub mod normal;

pub use bs::{bs_call_price, bs_intermediate_terms, bs_put_price, PricingEngine};
pub use normal::norm_cdf;
