//! Brand (company) type.

use crate::ids::CompanyId;
use serde::{Deserialize, Serialize};

/// A brand listed on the affiliates page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Company {
    /// Unique company identifier.
    pub id: CompanyId,
    /// Brand name.
    pub name: String,
    /// Country of origin.
    pub country: String,
    /// Brand website.
    pub url: String,
}
