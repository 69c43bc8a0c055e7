//! Static permission catalogs, one per actor domain

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{ALL, CREATE, DELETE, READ, UPDATE};
use crate::error::RightsError;

/// A grantable permission and the bits it supports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Definition {
    pub name: &'static str,
    pub title: &'static str,
    pub allowed: u8,
}

/// A titled group of definitions, for display only
#[derive(Debug, Clone, Copy)]
pub struct Section {
    pub title: &'static str,
    pub rights: &'static [Definition],
}

#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    pub sections: &'static [Section],
}

impl Catalog {
    /// All definitions, in section order
    pub fn definitions(&self) -> impl Iterator<Item = &'static Definition> {
        self.sections.iter().flat_map(|s| s.rights.iter())
    }

    pub fn find(&self, name: &str) -> Option<&'static Definition> {
        self.definitions().find(|d| d.name == name)
    }
}

const fn def(name: &'static str, title: &'static str, allowed: u8) -> Definition {
    Definition { name, title, allowed }
}

pub static AGENT: Catalog = Catalog {
    sections: &[
        Section {
            title: "Calendly",
            rights: &[
                def("calendly", "Appointments", READ),
                def("calendly_admin", "Events", READ),
            ],
        },
        Section {
            title: "Customer Service",
            rights: &[
                def("csr_agents", "Agents: Ability to manage agents and permissions", ALL),
                def("csr_claims", "Claims", CREATE | UPDATE | DELETE),
                def("csr_overwrite", "Claim Overwrite", CREATE | READ),
                def("csr_claims_provider", "Transfer to Provider", CREATE),
                def("csr_messaging", "Messaging", CREATE | READ),
                def("csr_templates", "Templates: Ability to create and modify templates", ALL),
                def("csr_stats", "Stats: Allowed to view stats", READ),
                def("justcall", "JustCall", READ),
                def("hubspot", "HubSpot", READ),
                def("everify", "E-Verification", READ | UPDATE),
                def("csr_leads", "Leads", READ),
            ],
        },
        Section {
            title: "CRM",
            rights: &[
                def("campaigns", "Campaigns", READ),
                def("customers", "Customers", READ | UPDATE),
                def("orders", "Orders", CREATE | READ | UPDATE),
                def("products", "Products", READ),
            ],
        },
        Section {
            title: "Patient Portal",
            rights: &[def("patient_account", "Account", CREATE | READ | UPDATE)],
        },
        Section {
            title: "Memo",
            rights: &[
                def("memo_mips", "Memo MIP", READ | UPDATE),
                def("memo_notes", "Memo Notes", READ | CREATE),
            ],
        },
        Section {
            title: "Pharmacy",
            rights: &[
                def("prescriptions", "Prescriptions", CREATE | READ | UPDATE),
                def("pharmacy_fill", "Pharmacy Fill", ALL),
                def("rx_diagnosis", "ICD to DoseSpot Diagnosis", READ),
                def("rx_hrt_order", "HRT Prescriptions", READ | UPDATE),
                def("rx_products", "DoseSpot medications", READ),
                def("welldyne_adhoc", "Adhoc", CREATE | READ | DELETE),
                def("welldyne_never_started", "Never Started", READ | UPDATE | DELETE),
                def("welldyne_outbound", "Outbound Failed", READ | UPDATE),
            ],
        },
    ],
};

pub static PROVIDER: Catalog = Catalog {
    sections: &[
        Section {
            title: "Provider Tool",
            rights: &[
                def("order_claims", "Order Claims", CREATE | DELETE),
                def("order_overwrite", "Order Claim Overwrite", CREATE),
                def("prov_templates", "Templates: Ability to create and modify templates", ALL),
            ],
        },
        Section {
            title: "CRM",
            rights: &[
                def("customers", "CRM Customers", READ),
                def("orders", "CRM Orders", READ | UPDATE),
            ],
        },
        Section {
            title: "Memo",
            rights: &[
                def("calendly", "Calendly Appointment", READ),
                def("memo_mips", "Memo MIP", READ | UPDATE),
                def("memo_notes", "Memo Notes", READ | CREATE),
            ],
        },
        Section {
            title: "Pharmacy",
            rights: &[
                def("prescriptions", "Prescriptions", CREATE | READ | UPDATE),
                def("medications", "Medications", READ),
            ],
        },
    ],
};

pub static USER: Catalog = Catalog {
    sections: &[
        Section {
            title: "Auth",
            rights: &[
                def("user", "Users", CREATE | READ | UPDATE),
                def("permission", "User Rights", READ | UPDATE),
            ],
        },
        Section {
            title: "CRM",
            rights: &[def("customers", "Customers", CREATE | READ | UPDATE)],
        },
        Section {
            title: "Patient",
            rights: &[
                def("patient_account", "Patient", CREATE | READ | UPDATE),
                def("prescriptions", "Prescriptions", READ | UPDATE),
                def("medications", "Medication History", READ),
                def("calendly", "Calendly", READ),
            ],
        },
        Section {
            title: "Providers",
            rights: &[
                def("providers", "Providers", CREATE | READ | UPDATE),
                def("prov_claims", "Claims", CREATE | UPDATE | DELETE),
                def("prov_overwrite", "Overwrite Claims", CREATE),
                def("prov_templates", "Templates", ALL),
            ],
        },
        Section {
            title: "CSR",
            rights: &[
                def("csr_agents", "Agents", ALL),
                def("csr_claims", "Claims", CREATE | UPDATE | DELETE),
                def("csr_overwrite", "Overwrite Claims", CREATE),
                def("csr_messaging", "Messaging", CREATE | READ),
                def("csr_stats", "Stats", READ),
                def("csr_templates", "Templates", ALL),
            ],
        },
        Section {
            title: "Memo",
            rights: &[
                def("memo_mips", "MIP", READ | UPDATE),
                def("memo_notes", "Notes", READ | CREATE),
            ],
        },
        Section {
            title: "WellDyne",
            rights: &[
                def("welldyne_adhoc", "AdHoc", CREATE | READ | DELETE),
                def("welldyne_outbound", "Outbound", READ | UPDATE),
            ],
        },
        Section {
            title: "Admin",
            rights: &[
                def("pharmacy_fill", "Pharmacy Fill", ALL),
                def("manual_adhoc", "Manual AdHoc", ALL),
                def("report_recipients", "Report Recipients", ALL),
            ],
        },
    ],
};

/// The kind of actor whose permissions are edited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Agent,
    Provider,
    User,
}

impl Domain {
    pub const ALL: [Domain; 3] = [Domain::Agent, Domain::Provider, Domain::User];

    pub fn catalog(self) -> &'static Catalog {
        match self {
            Domain::Agent => &AGENT,
            Domain::Provider => &PROVIDER,
            Domain::User => &USER,
        }
    }

    /// Agents carry rights only; providers and users may scope by idents
    pub fn supports_idents(self) -> bool {
        !matches!(self, Domain::Agent)
    }

    pub fn service(self) -> &'static str {
        match self {
            Domain::Agent => "csr",
            Domain::Provider => "providers",
            Domain::User => "auth",
        }
    }

    pub fn noun(self) -> &'static str {
        match self {
            Domain::Agent => "agent/permissions",
            Domain::Provider => "provider/permissions",
            Domain::User => "permissions",
        }
    }

    /// Request field carrying the actor id
    pub fn id_field(self) -> &'static str {
        match self {
            Domain::Agent => "agent_id",
            Domain::Provider => "provider_id",
            Domain::User => "user",
        }
    }

    /// Find the domain served at `service`/`noun`
    pub fn route(service: &str, noun: &str) -> Option<Domain> {
        Domain::ALL
            .into_iter()
            .find(|d| d.service() == service && d.noun() == noun.trim_matches('/'))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Domain::Agent => "agent",
            Domain::Provider => "provider",
            Domain::User => "user",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Domain {
    type Err = RightsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Domain::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| RightsError(format!("Unknown domain: {}", s)))
    }
}
