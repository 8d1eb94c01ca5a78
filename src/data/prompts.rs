use crate::models::metrics::{QueryCategory, SuggestedQuery};

pub const GREETING: &str = "Hello! I'm your FloatChat AI assistant 🌊 I can help you analyze \
oceanographic data from Argo floats, generate SQL queries, and answer questions about ocean \
conditions. What would you like to explore today?";

pub static SUGGESTED_QUERIES: &[SuggestedQuery] = &[
    SuggestedQuery {
        id: "temp_1",
        category: QueryCategory::Temperature,
        question: "Show me temperature trends in the Indian Ocean over the last 30 days",
        description: "Analyze temperature variations and trends across the Indian Ocean basin",
    },
    SuggestedQuery {
        id: "sal_1",
        category: QueryCategory::Salinity,
        question: "Compare salinity levels between Arabian Sea and Bay of Bengal",
        description: "Regional comparison of salinity measurements between two major basins",
    },
    SuggestedQuery {
        id: "oxy_1",
        category: QueryCategory::Oxygen,
        question: "Find areas with low oxygen concentrations (< 150 μmol/kg)",
        description: "Identify potential oxygen minimum zones and their geographic distribution",
    },
    SuggestedQuery {
        id: "loc_1",
        category: QueryCategory::Location,
        question: "Which floats are currently active near the Maldives?",
        description: "Get real-time status of floats in a specific geographic region",
    },
    SuggestedQuery {
        id: "trend_1",
        category: QueryCategory::Trends,
        question: "Show me seasonal patterns in the monsoon regions",
        description: "Analyze how ocean parameters change during different monsoon seasons",
    },
    SuggestedQuery {
        id: "temp_2",
        category: QueryCategory::Temperature,
        question: "What's the thermocline depth in the equatorial Indian Ocean?",
        description: "Identify the depth where temperature gradient is steepest",
    },
    SuggestedQuery {
        id: "sal_2",
        category: QueryCategory::Salinity,
        question: "Find the saltiest water masses in our current dataset",
        description: "Locate high-salinity water masses and their characteristics",
    },
    SuggestedQuery {
        id: "oxy_2",
        category: QueryCategory::Oxygen,
        question: "Track oxygen depletion events over time",
        description: "Monitor areas showing declining oxygen levels over multiple profiles",
    },
];

pub static CONVERSATION_STARTERS: &[&str] = &[
    "What are the current ocean conditions in the Arabian Sea?",
    "Show me the latest temperature profiles from Indian Ocean floats",
    "Compare salinity between different ocean basins",
    "Find floats with recent oxygen measurements",
    "Generate a report on Bay of Bengal water masses",
    "What seasonal patterns do you see in the data?",
    "Show me floats that haven't reported in the last week",
    "Create a visualization of temperature vs depth profiles",
];
