//! Service catalog module
//!
//! The immutable table of services the site offers. The order form submits
//! the service's identifier; the catalog resolves it to the display name
//! used in notifications.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Details for a single offered service
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ServiceDetails {
    /// Stable identifier, used by the order form and the details modal
    #[schema(example = "web-development")]
    pub id: String,

    /// Display name
    #[schema(example = "Web Development")]
    pub name: String,

    /// Short tagline shown in the details modal
    pub tagline: String,

    /// Longer description
    pub description: String,

    /// Advertised price
    #[schema(example = "from $250")]
    pub price: String,
}

/// Immutable table of offered services, keyed by identifier
#[derive(Clone, Debug)]
pub struct ServiceCatalog {
    services: Vec<ServiceDetails>,
}

impl ServiceCatalog {
    /// Create a catalog from a fixed list of services
    pub fn new(services: Vec<ServiceDetails>) -> Self {
        Self { services }
    }

    /// Look up a service by its identifier
    pub fn get(&self, id: &str) -> Option<&ServiceDetails> {
        self.services.iter().find(|service| service.id == id)
    }

    /// All offered services, in display order
    pub fn services(&self) -> &[ServiceDetails] {
        &self.services
    }

    /// Resolve a submitted item name to its catalog display name.
    ///
    /// Unknown values pass through untouched so free-text item names from
    /// the contact form keep working.
    pub fn resolve_item_name(&self, raw: &str) -> String {
        self.get(raw)
            .map(|service| service.name.clone())
            .unwrap_or_else(|| raw.to_string())
    }
}

impl Default for ServiceCatalog {
    fn default() -> Self {
        let service = |id: &str, name: &str, tagline: &str, description: &str, price: &str| {
            ServiceDetails {
                id: id.to_string(),
                name: name.to_string(),
                tagline: tagline.to_string(),
                description: description.to_string(),
                price: price.to_string(),
            }
        };

        Self::new(vec![
            service(
                "web-development",
                "Web Development",
                "Fast, modern websites",
                "Design and build of landing pages, business sites and small web apps.",
                "from $250",
            ),
            service(
                "cybersecurity",
                "Cybersecurity Audit",
                "Find the gaps before someone else does",
                "Security review of your devices, accounts and small-office network.",
                "from $180",
            ),
            service(
                "networking",
                "Network Setup",
                "Wired and wireless done right",
                "Office and home network design, installation and troubleshooting.",
                "from $120",
            ),
            service(
                "data-recovery",
                "Data Recovery",
                "Get your files back",
                "Recovery of lost or corrupted data from disks, phones and memory cards.",
                "from $90",
            ),
            service(
                "it-support",
                "IT Support Retainer",
                "An engineer on call",
                "Monthly remote and on-site support for small businesses.",
                "from $150/month",
            ),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_known_service() {
        let catalog = ServiceCatalog::default();

        let service = catalog.get("web-development").expect("service exists");

        assert_eq!(service.name, "Web Development");
    }

    #[test]
    fn test_get_unknown_service() {
        let catalog = ServiceCatalog::default();

        assert!(catalog.get("time-travel").is_none());
    }

    #[test]
    fn test_resolve_item_name_maps_identifier_to_display_name() {
        let catalog = ServiceCatalog::default();

        assert_eq!(catalog.resolve_item_name("data-recovery"), "Data Recovery");
    }

    #[test]
    fn test_resolve_item_name_passes_unknown_values_through() {
        let catalog = ServiceCatalog::default();

        assert_eq!(catalog.resolve_item_name("General Inquiry"), "General Inquiry");
    }
}
