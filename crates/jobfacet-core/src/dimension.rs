use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CoreError;

/// One facet of the job search filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterDimension {
    Seniority,
    Location,
    WorkArrangement,
    CompanyStage,
    ProductLifecycle,
    ProductDomain,
    ManagementScope,
    IndustryVertical,
    Experience,
    DomainExpertise,
}

impl FilterDimension {
    pub const ALL: [FilterDimension; 10] = [
        FilterDimension::Seniority,
        FilterDimension::Location,
        FilterDimension::WorkArrangement,
        FilterDimension::CompanyStage,
        FilterDimension::ProductLifecycle,
        FilterDimension::ProductDomain,
        FilterDimension::ManagementScope,
        FilterDimension::IndustryVertical,
        FilterDimension::Experience,
        FilterDimension::DomainExpertise,
    ];

    /// The ordered canonical labels surfaced in UI dropdowns.
    ///
    /// Dimensions without a closed vocabulary can still produce other labels
    /// through the generic transform; those sort after these.
    #[must_use]
    pub fn canonical_labels(self) -> &'static [&'static str] {
        match self {
            FilterDimension::Seniority => &[
                "Entry Level",
                "Mid Level",
                "Senior",
                "Lead",
                "Staff",
                "Principal",
                "Director",
                "VP",
                "Executive",
            ],
            FilterDimension::Location => &[
                "San Francisco Bay Area",
                "New York City",
                "Seattle",
                "Los Angeles",
                "Boston",
                "Austin",
                "Chicago",
                "Denver",
                "Washington DC",
                "Remote",
            ],
            FilterDimension::WorkArrangement => &["Remote", "Hybrid", "On-site"],
            FilterDimension::CompanyStage => &[
                "Pre-Seed",
                "Seed",
                "Series A",
                "Series B",
                "Series C",
                "Series D Plus",
                "Pre-IPO",
                "Public",
                "Bootstrapped",
                "Acquired",
            ],
            FilterDimension::ProductLifecycle => &[
                "Zero to One",
                "Early Growth",
                "Scaling",
                "Mature",
                "Turnaround",
                "Sunset",
            ],
            FilterDimension::ProductDomain => &[
                "B2B",
                "B2C",
                "B2B2C",
                "Marketplace",
                "Platform",
                "Developer Tools",
                "Internal Tools",
                "Hardware",
            ],
            FilterDimension::ManagementScope => &[
                "Individual Contributor",
                "Player-Coach",
                "People Manager",
                "Manager of Managers",
            ],
            FilterDimension::IndustryVertical => &[
                "Fintech",
                "Healthcare",
                "E-commerce",
                "EdTech",
                "Enterprise Software",
                "Consumer",
                "Media",
                "Government",
                "Climate",
                "AI/ML",
            ],
            FilterDimension::Experience => &["0-2 Years", "3-5 Years", "6-9 Years", "10+ Years"],
            FilterDimension::DomainExpertise => &[
                "AI/ML",
                "Payments",
                "Data",
                "Growth",
                "Platform",
                "Security",
                "Mobile",
                "Infrastructure",
                "Analytics",
                "Marketplaces",
            ],
        }
    }

    /// `true` when every non-empty input must land on a canonical label.
    #[must_use]
    pub fn is_closed(self) -> bool {
        matches!(self, FilterDimension::WorkArrangement)
    }

    /// Database field the raw values of this dimension are stored in.
    #[must_use]
    pub fn field_name(self) -> &'static str {
        match self {
            FilterDimension::Seniority => "seniority_level",
            FilterDimension::Location => "location",
            FilterDimension::WorkArrangement => "work_arrangement",
            FilterDimension::CompanyStage => "company_stage",
            FilterDimension::ProductLifecycle => "product_lifecycle",
            FilterDimension::ProductDomain => "product_domain",
            FilterDimension::ManagementScope => "management_scope",
            FilterDimension::IndustryVertical => "industry_vertical",
            FilterDimension::Experience => "experience_level",
            FilterDimension::DomainExpertise => "domain_expertise",
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            FilterDimension::Seniority => "seniority",
            FilterDimension::Location => "location",
            FilterDimension::WorkArrangement => "work_arrangement",
            FilterDimension::CompanyStage => "company_stage",
            FilterDimension::ProductLifecycle => "product_lifecycle",
            FilterDimension::ProductDomain => "product_domain",
            FilterDimension::ManagementScope => "management_scope",
            FilterDimension::IndustryVertical => "industry_vertical",
            FilterDimension::Experience => "experience",
            FilterDimension::DomainExpertise => "domain_expertise",
        }
    }
}

impl std::fmt::Display for FilterDimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterDimension {
    type Err = CoreError;

    /// Accepts snake_case, camelCase and kebab-case identifiers.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let squashed: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-' && *c != ' ')
            .collect::<String>()
            .to_lowercase();

        match squashed.as_str() {
            "seniority" | "senioritylevel" => Ok(FilterDimension::Seniority),
            "location" | "metro" => Ok(FilterDimension::Location),
            "workarrangement" | "remotetype" => Ok(FilterDimension::WorkArrangement),
            "companystage" | "stage" => Ok(FilterDimension::CompanyStage),
            "productlifecycle" | "lifecycle" => Ok(FilterDimension::ProductLifecycle),
            "productdomain" => Ok(FilterDimension::ProductDomain),
            "managementscope" => Ok(FilterDimension::ManagementScope),
            "industryvertical" | "industry" => Ok(FilterDimension::IndustryVertical),
            "experience" | "experiencelevel" | "experiencebucket" | "yearsofexperience" => {
                Ok(FilterDimension::Experience)
            }
            "domainexpertise" => Ok(FilterDimension::DomainExpertise),
            _ => Err(CoreError::UnknownDimension(s.to_string())),
        }
    }
}
