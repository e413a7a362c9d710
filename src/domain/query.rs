use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

use crate::domain::filter::CompanyFilter;

/// Characters left untouched by `application/x-www-form-urlencoded` serialization
const FORM_ENCODE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'*')
    .remove(b'-')
    .remove(b'.')
    .remove(b'_');

pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// One page request against `GET /companies`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompanyQuery {
    pub page: u32,
    pub limit: u32,
    pub filter: CompanyFilter,
}

impl CompanyQuery {
    pub fn new(page: u32, limit: u32, filter: CompanyFilter) -> Self {
        Self {
            page,
            limit,
            filter,
        }
    }

    /// Serialized query string, e.g. `page=2&limit=10&country=New+Zealand`.
    ///
    /// Empty filters are omitted entirely. The result doubles as the response-cache key,
    /// so the parameter order is fixed.
    pub fn to_query_string(&self) -> String {
        let mut pairs = vec![
            format!("page={}", self.page),
            format!("limit={}", self.limit),
        ];
        for (field, value) in self.filter.active() {
            pairs.push(format!("{}={}", field.param(), form_encode(value)));
        }
        pairs.join("&")
    }
}

fn form_encode(value: &str) -> String {
    // '%' itself is encoded as %25, so every %20 left here came from a space
    utf8_percent_encode(value, FORM_ENCODE)
        .to_string()
        .replace("%20", "+")
}
