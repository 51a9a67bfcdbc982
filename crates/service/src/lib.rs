//! Service layer providing the product use cases on top of `models`.
//! - Separates use-case orchestration from data access.
//! - Talks to storage only through the `ProductRepository` trait.
//! - Converts between stored rows and the transport DTO.

pub mod errors;
pub mod product;
#[cfg(test)]
pub mod test_support;
