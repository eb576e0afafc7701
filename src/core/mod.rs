pub mod corpus;
pub mod instances;
