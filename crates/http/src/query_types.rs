//! Request/query types (Deserialize)

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct DivideQuery {
    pub numerator: f64,
    pub denominator: f64,
}

#[derive(Debug, Deserialize)]
pub struct RadicandQuery {
    pub radicand: f64,
}

#[derive(Debug, Deserialize)]
pub struct ValueQuery {
    pub value: f64,
}

#[derive(Debug, Deserialize)]
pub struct FactorialQuery {
    pub n: i32,
}
