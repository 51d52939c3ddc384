//! Built-in special-case tables, one shared table plus one per dimension.
//!
//! Raw keys are written the way they are stored upstream (snake_case); the
//! normalizer folds them through [`jobfacet_core::lookup_key`] when it builds
//! its lookup maps, and keeps the raw spelling for reverse mapping.

use jobfacet_core::FilterDimension;

/// Casing for single tokens in the generic title-case transform.
pub(crate) const ACRONYM_TOKENS: &[(&str, &str)] = &[
    ("a/b", "A/B"),
    ("ai", "AI"),
    ("ai/ml", "AI/ML"),
    ("api", "API"),
    ("apis", "APIs"),
    ("apac", "APAC"),
    ("apm", "APM"),
    ("ar", "AR"),
    ("arr", "ARR"),
    ("aws", "AWS"),
    ("b2b", "B2B"),
    ("b2b2c", "B2B2C"),
    ("b2c", "B2C"),
    ("cac", "CAC"),
    ("ceo", "CEO"),
    ("ci/cd", "CI/CD"),
    ("cms", "CMS"),
    ("cpo", "CPO"),
    ("crm", "CRM"),
    ("cto", "CTO"),
    ("cx", "CX"),
    ("d2c", "D2C"),
    ("dau", "DAU"),
    ("dc", "DC"),
    ("devops", "DevOps"),
    ("dtc", "DTC"),
    ("emea", "EMEA"),
    ("erp", "ERP"),
    ("eu", "EU"),
    ("gcp", "GCP"),
    ("gdpr", "GDPR"),
    ("github", "GitHub"),
    ("gpm", "GPM"),
    ("graphql", "GraphQL"),
    ("gtm", "GTM"),
    ("hipaa", "HIPAA"),
    ("hr", "HR"),
    ("hubspot", "HubSpot"),
    ("ii", "II"),
    ("iii", "III"),
    ("ios", "iOS"),
    ("iot", "IoT"),
    ("ipo", "IPO"),
    ("javascript", "JavaScript"),
    ("jtbd", "JTBD"),
    ("kpi", "KPI"),
    ("kpis", "KPIs"),
    ("latam", "LATAM"),
    ("llm", "LLM"),
    ("llms", "LLMs"),
    ("ltv", "LTV"),
    ("mau", "MAU"),
    ("ml", "ML"),
    ("mrr", "MRR"),
    ("mvp", "MVP"),
    ("nlp", "NLP"),
    ("nosql", "NoSQL"),
    ("nps", "NPS"),
    ("nyc", "NYC"),
    ("okr", "OKR"),
    ("okrs", "OKRs"),
    ("paas", "PaaS"),
    ("iaas", "IaaS"),
    ("plg", "PLG"),
    ("pm", "PM"),
    ("pms", "PMs"),
    ("powerpoint", "PowerPoint"),
    ("qa", "QA"),
    ("roi", "ROI"),
    ("saas", "SaaS"),
    ("sdk", "SDK"),
    ("sem", "SEM"),
    ("seo", "SEO"),
    ("sf", "SF"),
    ("sql", "SQL"),
    ("typescript", "TypeScript"),
    ("uk", "UK"),
    ("ui", "UI"),
    ("ui/ux", "UI/UX"),
    ("usa", "USA"),
    ("ux", "UX"),
    ("ux/ui", "UX/UI"),
    ("vp", "VP"),
    ("vr", "VR"),
];

/// Phrases and jargon whose display form the title-case transform cannot
/// derive. Consulted for every dimension except work arrangement.
pub(crate) const SHARED_LABELS: &[(&str, &str)] = &[
    ("pre_ipo", "Pre-IPO"),
    ("e_commerce", "E-commerce"),
    ("ecommerce", "E-commerce"),
    ("e_learning", "E-learning"),
    ("edtech", "EdTech"),
    ("ed_tech", "EdTech"),
    ("fintech", "Fintech"),
    ("fin_tech", "Fintech"),
    ("healthtech", "HealthTech"),
    ("health_tech", "HealthTech"),
    ("proptech", "PropTech"),
    ("insurtech", "InsurTech"),
    ("martech", "MarTech"),
    ("adtech", "AdTech"),
    ("cleantech", "CleanTech"),
    ("govtech", "GovTech"),
    ("ai_ml", "AI/ML"),
    ("machine_learning", "AI/ML"),
    ("artificial_intelligence", "AI/ML"),
    ("go_to_market", "Go-to-Market"),
    ("developer_tools", "Developer Tools"),
    ("devtools", "Developer Tools"),
    ("dev_tools", "Developer Tools"),
    ("ui_ux", "UI/UX"),
    ("ux_ui", "UX/UI"),
    ("full_stack", "Full-Stack"),
    ("fullstack", "Full-Stack"),
    ("ci_cd", "CI/CD"),
    ("a_b_testing", "A/B Testing"),
    ("ab_testing", "A/B Testing"),
    ("non_profit", "Nonprofit"),
    ("nonprofit", "Nonprofit"),
    ("web3", "Web3"),
    ("web_3", "Web3"),
    ("b2b_saas", "B2B SaaS"),
    ("software_as_a_service", "SaaS"),
];

/// Extra entries used only for tags, on top of [`SHARED_LABELS`].
pub(crate) const TAG_LABELS: &[(&str, &str)] = &[
    ("product_led_growth", "Product-Led Growth"),
    ("jobs_to_be_done", "Jobs-to-be-Done"),
    ("a_b_test", "A/B Testing"),
    ("experimentation", "Experimentation"),
    ("user_research", "User Research"),
    ("customer_discovery", "Customer Discovery"),
    ("roadmapping", "Roadmapping"),
    ("road_mapping", "Roadmapping"),
    ("prd", "PRDs"),
    ("prds", "PRDs"),
    ("okr", "OKRs"),
    ("okrs", "OKRs"),
    ("kpi", "KPIs"),
    ("kpis", "KPIs"),
    ("north_star_metric", "North Star Metric"),
    ("jira", "Jira"),
    ("figma", "Figma"),
    ("amplitude", "Amplitude"),
    ("mixpanel", "Mixpanel"),
    ("looker", "Looker"),
    ("tableau", "Tableau"),
    ("google_analytics", "Google Analytics"),
    ("agile", "Agile"),
    ("scrum", "Scrum"),
    ("kanban", "Kanban"),
    ("lean", "Lean"),
    ("design_thinking", "Design Thinking"),
    ("dual_track_agile", "Dual-Track Agile"),
    ("shape_up", "Shape Up"),
    ("net_revenue_retention", "Net Revenue Retention"),
    ("nrr", "NRR"),
    ("churn", "Churn"),
    ("retention", "Retention"),
    ("activation", "Activation"),
    ("conversion_rate", "Conversion Rate"),
];

const SENIORITY_LABELS: &[(&str, &str)] = &[
    ("entry", "Entry Level"),
    ("entry_level", "Entry Level"),
    ("junior", "Entry Level"),
    ("jr", "Entry Level"),
    ("associate", "Entry Level"),
    ("associate_product_manager", "Entry Level"),
    ("apm", "Entry Level"),
    ("intern", "Entry Level"),
    ("new_grad", "Entry Level"),
    ("mid", "Mid Level"),
    ("mid_level", "Mid Level"),
    ("intermediate", "Mid Level"),
    ("product_manager", "Mid Level"),
    ("senior", "Senior"),
    ("sr", "Senior"),
    ("senior_product_manager", "Senior"),
    ("lead", "Lead"),
    ("team_lead", "Lead"),
    ("group_product_manager", "Lead"),
    ("gpm", "Lead"),
    ("staff", "Staff"),
    ("staff_product_manager", "Staff"),
    ("principal", "Principal"),
    ("principal_product_manager", "Principal"),
    ("director", "Director"),
    ("senior_director", "Director"),
    ("head_of_product", "Director"),
    ("vp", "VP"),
    ("vice_president", "VP"),
    ("svp", "VP"),
    ("vp_product", "VP"),
    ("executive", "Executive"),
    ("c_level", "Executive"),
    ("cpo", "Executive"),
    ("chief_product_officer", "Executive"),
];

const LOCATION_LABELS: &[(&str, &str)] = &[
    ("sf", "San Francisco Bay Area"),
    ("san_francisco", "San Francisco Bay Area"),
    ("bay_area", "San Francisco Bay Area"),
    ("sf_bay_area", "San Francisco Bay Area"),
    ("silicon_valley", "San Francisco Bay Area"),
    ("nyc", "New York City"),
    ("new_york", "New York City"),
    ("new_york_ny", "New York City"),
    ("seattle", "Seattle"),
    ("la", "Los Angeles"),
    ("los_angeles", "Los Angeles"),
    ("boston", "Boston"),
    ("austin", "Austin"),
    ("chicago", "Chicago"),
    ("denver", "Denver"),
    ("dc", "Washington DC"),
    ("washington_dc", "Washington DC"),
    ("remote", "Remote"),
    ("remote_us", "Remote"),
    ("anywhere", "Remote"),
];

const WORK_ARRANGEMENT_LABELS: &[(&str, &str)] = &[
    ("remote", "Remote"),
    ("remote_first", "Remote"),
    ("fully_remote", "Remote"),
    ("remote_only", "Remote"),
    ("remote_friendly", "Remote"),
    ("remote_ok", "Remote"),
    ("remote_us", "Remote"),
    ("distributed", "Remote"),
    ("work_from_home", "Remote"),
    ("wfh", "Remote"),
    ("anywhere", "Remote"),
    ("telecommute", "Remote"),
    ("hybrid", "Hybrid"),
    ("hybrid_remote", "Hybrid"),
    ("remote_hybrid", "Hybrid"),
    ("partially_remote", "Hybrid"),
    ("flexible", "Hybrid"),
    ("on_site", "On-site"),
    ("onsite", "On-site"),
    ("in_office", "On-site"),
    ("in_person", "On-site"),
    ("office", "On-site"),
    ("office_based", "On-site"),
];

const COMPANY_STAGE_LABELS: &[(&str, &str)] = &[
    ("pre_seed", "Pre-Seed"),
    ("preseed", "Pre-Seed"),
    ("seed", "Seed"),
    ("seed_stage", "Seed"),
    ("series_a", "Series A"),
    ("series_b", "Series B"),
    ("series_c", "Series C"),
    ("series_d", "Series D Plus"),
    ("series_d_plus", "Series D Plus"),
    ("series_e", "Series D Plus"),
    ("series_f", "Series D Plus"),
    ("late_stage", "Series D Plus"),
    ("pre_ipo", "Pre-IPO"),
    ("ipo", "Public"),
    ("public", "Public"),
    ("publicly_traded", "Public"),
    ("bootstrapped", "Bootstrapped"),
    ("self_funded", "Bootstrapped"),
    ("acquired", "Acquired"),
    ("subsidiary", "Acquired"),
];

const PRODUCT_LIFECYCLE_LABELS: &[(&str, &str)] = &[
    ("zero_to_one", "Zero to One"),
    ("0_to_1", "Zero to One"),
    ("0_1", "Zero to One"),
    ("new_product", "Zero to One"),
    ("greenfield", "Zero to One"),
    ("early_growth", "Early Growth"),
    ("growth", "Early Growth"),
    ("scaling", "Scaling"),
    ("scale", "Scaling"),
    ("hypergrowth", "Scaling"),
    ("mature", "Mature"),
    ("maturity", "Mature"),
    ("established", "Mature"),
    ("turnaround", "Turnaround"),
    ("sunset", "Sunset"),
    ("sunsetting", "Sunset"),
    ("legacy", "Sunset"),
];

const PRODUCT_DOMAIN_LABELS: &[(&str, &str)] = &[
    ("b2b", "B2B"),
    ("b2b_saas", "B2B"),
    ("enterprise", "B2B"),
    ("b2c", "B2C"),
    ("consumer", "B2C"),
    ("b2b2c", "B2B2C"),
    ("marketplace", "Marketplace"),
    ("two_sided_marketplace", "Marketplace"),
    ("platform", "Platform"),
    ("developer_tools", "Developer Tools"),
    ("devtools", "Developer Tools"),
    ("internal_tools", "Internal Tools"),
    ("hardware", "Hardware"),
    ("iot", "Hardware"),
    ("devices", "Hardware"),
];

const MANAGEMENT_SCOPE_LABELS: &[(&str, &str)] = &[
    ("ic", "Individual Contributor"),
    ("individual_contributor", "Individual Contributor"),
    ("player_coach", "Player-Coach"),
    ("people_manager", "People Manager"),
    ("manager", "People Manager"),
    ("team_manager", "People Manager"),
    ("manager_of_managers", "Manager of Managers"),
    ("org_leader", "Manager of Managers"),
];

const INDUSTRY_VERTICAL_LABELS: &[(&str, &str)] = &[
    ("fintech", "Fintech"),
    ("financial_services", "Fintech"),
    ("healthcare", "Healthcare"),
    ("healthtech", "Healthcare"),
    ("health_tech", "Healthcare"),
    ("e_commerce", "E-commerce"),
    ("ecommerce", "E-commerce"),
    ("retail", "E-commerce"),
    ("edtech", "EdTech"),
    ("education", "EdTech"),
    ("enterprise_software", "Enterprise Software"),
    ("enterprise", "Enterprise Software"),
    ("saas", "Enterprise Software"),
    ("consumer", "Consumer"),
    ("media", "Media"),
    ("entertainment", "Media"),
    ("government", "Government"),
    ("govtech", "Government"),
    ("public_sector", "Government"),
    ("climate", "Climate"),
    ("climate_tech", "Climate"),
    ("cleantech", "Climate"),
    ("ai_ml", "AI/ML"),
    ("ai", "AI/ML"),
    ("machine_learning", "AI/ML"),
    ("artificial_intelligence", "AI/ML"),
];

const EXPERIENCE_LABELS: &[(&str, &str)] = &[
    ("entry_level", "0-2 Years"),
    ("junior", "0-2 Years"),
    ("mid_level", "3-5 Years"),
    ("senior", "6-9 Years"),
    ("expert", "10+ Years"),
    ("executive", "10+ Years"),
];

const DOMAIN_EXPERTISE_LABELS: &[(&str, &str)] = &[
    ("ai_ml", "AI/ML"),
    ("ai", "AI/ML"),
    ("machine_learning", "AI/ML"),
    ("payments", "Payments"),
    ("fintech", "Payments"),
    ("data", "Data"),
    ("data_platform", "Data"),
    ("growth", "Growth"),
    ("platform", "Platform"),
    ("security", "Security"),
    ("cybersecurity", "Security"),
    ("mobile", "Mobile"),
    ("infrastructure", "Infrastructure"),
    ("infra", "Infrastructure"),
    ("analytics", "Analytics"),
    ("marketplaces", "Marketplaces"),
    ("marketplace", "Marketplaces"),
];

pub(crate) fn dimension_labels(dimension: FilterDimension) -> &'static [(&'static str, &'static str)] {
    match dimension {
        FilterDimension::Seniority => SENIORITY_LABELS,
        FilterDimension::Location => LOCATION_LABELS,
        FilterDimension::WorkArrangement => WORK_ARRANGEMENT_LABELS,
        FilterDimension::CompanyStage => COMPANY_STAGE_LABELS,
        FilterDimension::ProductLifecycle => PRODUCT_LIFECYCLE_LABELS,
        FilterDimension::ProductDomain => PRODUCT_DOMAIN_LABELS,
        FilterDimension::ManagementScope => MANAGEMENT_SCOPE_LABELS,
        FilterDimension::IndustryVertical => INDUSTRY_VERTICAL_LABELS,
        FilterDimension::Experience => EXPERIENCE_LABELS,
        FilterDimension::DomainExpertise => DOMAIN_EXPERTISE_LABELS,
    }
}

/// Placeholder location values that are never place names.
pub(crate) const LOCATION_DENYLIST: &[&str] = &[
    "n/a",
    "na",
    "none",
    "null",
    "nil",
    "undefined",
    "unknown",
    "tbd",
    "tba",
    "to be determined",
    "not specified",
    "unspecified",
    "various",
    "various locations",
    "multiple",
    "multiple locations",
    "see description",
    "see job description",
    "location",
    "other",
];
