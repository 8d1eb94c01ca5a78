use crate::models::ocean::{ClimatePattern, MarineLife, MonthlyPoint, Ocean, OceanDetails};
use crate::models::trend::Trend;

const fn m(
    month: &'static str,
    temperature: f64,
    salinity: f64,
    wave: f64,
    wind: f64,
) -> MonthlyPoint {
    MonthlyPoint {
        month,
        temperature,
        salinity,
        wave_height: Some(wave),
        wind_speed: Some(wind),
    }
}

const fn ts(month: &'static str, temperature: f64, salinity: f64) -> MonthlyPoint {
    MonthlyPoint {
        month,
        temperature,
        salinity,
        wave_height: None,
        wind_speed: None,
    }
}

static INDIAN_OCEAN: OceanDetails = OceanDetails {
    general_info: "The Indian Ocean is the third-largest ocean, covering approximately 70.56 million km². \
It's bounded by Asia to the north, Africa to the west, Australia to the east, and Antarctica to the south. \
Known for its warm waters, monsoon weather patterns, and rich marine biodiversity. The ocean plays a crucial \
role in global climate regulation and supports major shipping routes.",
    depth: 3741.0,
    monthly: &[
        m("Jan", 27.2, 34.5, 1.9, 14.1),
        m("Feb", 27.8, 34.6, 2.0, 14.8),
        m("Mar", 28.1, 34.7, 2.1, 15.2),
        m("Apr", 28.5, 34.7, 2.2, 15.5),
        m("May", 28.8, 34.8, 2.3, 16.1),
        m("Jun", 28.5, 34.7, 2.1, 15.3),
        m("Jul", 28.2, 34.6, 2.0, 14.9),
        m("Aug", 27.9, 34.5, 1.9, 14.5),
        m("Sep", 28.3, 34.6, 2.0, 15.0),
        m("Oct", 28.7, 34.8, 2.2, 15.8),
        m("Nov", 28.4, 34.7, 2.1, 15.4),
        m("Dec", 27.6, 34.5, 1.9, 14.3),
    ],
    marine_life: Some(MarineLife {
        species: &["Blue Whale", "Dugong", "Manta Ray", "Whale Shark", "Tuna"],
        biodiversity_index: 8.7,
        protected_areas: 45,
        coral_reefs: "High density in Maldives and Seychelles",
    }),
    climate: Some(ClimatePattern {
        monsoons: "Strong seasonal patterns affecting weather across South Asia",
        elnino: "Indian Ocean Dipole affects regional climate",
        currents: "Agulhas Current, South Equatorial Current",
    }),
};

static PACIFIC_OCEAN: OceanDetails = OceanDetails {
    general_info: "The Pacific Ocean is the largest and deepest ocean on Earth, covering about 165 million km². \
It extends from the Arctic Ocean in the north to the Southern Ocean in the south, and is bounded by Asia and \
Australia in the west and the Americas in the east. The Pacific contains more than half of the free water on \
Earth and is home to the Ring of Fire.",
    depth: 4280.0,
    monthly: &[
        m("Jan", 26.8, 34.0, 2.3, 17.2),
        m("Feb", 27.1, 34.1, 2.4, 17.8),
        m("Mar", 27.5, 34.2, 2.5, 18.1),
        m("Apr", 27.8, 34.2, 2.6, 18.5),
        m("May", 28.2, 34.3, 2.7, 19.1),
        m("Jun", 28.1, 34.2, 2.5, 18.1),
        m("Jul", 27.9, 34.1, 2.4, 17.8),
        m("Aug", 27.6, 34.0, 2.3, 17.3),
        m("Sep", 27.8, 34.1, 2.4, 17.9),
        m("Oct", 28.0, 34.2, 2.5, 18.3),
        m("Nov", 27.7, 34.1, 2.4, 17.7),
        m("Dec", 27.2, 34.0, 2.3, 17.1),
    ],
    marine_life: Some(MarineLife {
        species: &["Great White Shark", "Sea Turtle", "Salmon", "Dolphin", "Octopus"],
        biodiversity_index: 9.2,
        protected_areas: 127,
        coral_reefs: "Great Barrier Reef and Coral Triangle",
    }),
    climate: Some(ClimatePattern {
        monsoons: "Asian monsoon system interaction",
        elnino: "El Niño/La Niña origin, major global climate driver",
        currents: "Kuroshio Current, California Current, Equatorial Counter Current",
    }),
};

static ATLANTIC_OCEAN: OceanDetails = OceanDetails {
    general_info: "The Atlantic Ocean is the second-largest ocean, covering about 106 million km². It separates \
the Old and New Worlds, connecting Europe and Africa with the Americas. The Atlantic is known for its S-shaped \
basin, the Mid-Atlantic Ridge, and its role in global thermohaline circulation including the Gulf Stream.",
    depth: 3646.0,
    monthly: &[
        m("Jan", 22.5, 35.3, 3.5, 24.1),
        m("Feb", 22.8, 35.2, 3.4, 23.7),
        m("Mar", 23.2, 35.1, 3.3, 23.2),
        m("Apr", 23.8, 35.0, 3.1, 22.5),
        m("May", 24.5, 35.1, 3.0, 21.8),
        m("Jun", 25.1, 35.2, 2.9, 21.2),
        m("Jul", 25.3, 35.1, 2.8, 20.9),
        m("Aug", 25.0, 35.0, 2.9, 21.1),
        m("Sep", 24.6, 35.1, 3.0, 21.7),
        m("Oct", 24.1, 35.1, 3.2, 22.4),
        m("Nov", 23.4, 35.2, 3.4, 23.1),
        m("Dec", 22.9, 35.3, 3.5, 23.8),
    ],
    marine_life: Some(MarineLife {
        species: &["Humpback Whale", "Atlantic Cod", "Sea Bass", "Lobster", "Shark"],
        biodiversity_index: 8.1,
        protected_areas: 89,
        coral_reefs: "Caribbean and Brazilian coast",
    }),
    climate: Some(ClimatePattern {
        monsoons: "West African monsoon influence",
        elnino: "Atlantic Multidecadal Oscillation",
        currents: "Gulf Stream, Labrador Current, Brazil Current",
    }),
};

static ARABIAN_SEA: OceanDetails = OceanDetails {
    general_info: "The Arabian Sea is a region of the northern Indian Ocean, bounded by Pakistan and Iran to the \
north, the Indian Peninsula to the east, and the Arabian Peninsula to the west. It's an important maritime trade \
route and is known for its monsoon patterns, upwelling phenomena, and rich marine life including seasonal blooms.",
    depth: 2734.0,
    monthly: &[
        m("Jan", 28.1, 36.0, 1.6, 11.2),
        m("Feb", 28.5, 36.1, 1.7, 11.8),
        m("Mar", 29.0, 36.2, 1.8, 12.3),
        m("Apr", 29.5, 36.3, 1.9, 12.9),
        m("May", 30.1, 36.4, 2.0, 13.5),
        m("Jun", 29.8, 36.3, 1.8, 12.7),
        m("Jul", 29.2, 36.1, 1.7, 12.1),
        m("Aug", 28.9, 36.0, 1.6, 11.8),
        m("Sep", 29.3, 36.2, 1.7, 12.4),
        m("Oct", 29.7, 36.3, 1.8, 13.1),
        m("Nov", 29.4, 36.2, 1.8, 12.8),
        m("Dec", 28.6, 36.1, 1.7, 11.9),
    ],
    marine_life: None,
    climate: None,
};

static MEDITERRANEAN_SEA: OceanDetails = OceanDetails {
    general_info: "The Mediterranean Sea is a sea connected to the Atlantic Ocean, surrounded by the \
Mediterranean Basin and almost completely enclosed by land. It has played a central role in the history of \
Western civilization and is known for its unique climate, biodiversity, and cultural significance.",
    depth: 1500.0,
    monthly: &[
        m("Jan", 16.2, 38.6, 1.5, 21.2),
        m("Feb", 16.8, 38.5, 1.4, 20.8),
        m("Mar", 18.5, 38.4, 1.3, 20.1),
        m("Apr", 20.8, 38.3, 1.2, 19.3),
        m("May", 23.5, 38.2, 1.0, 17.8),
        m("Jun", 26.1, 38.4, 0.9, 16.2),
        m("Jul", 27.8, 38.5, 0.8, 15.1),
        m("Aug", 27.9, 38.6, 0.8, 15.3),
        m("Sep", 25.7, 38.4, 1.0, 17.1),
        m("Oct", 22.4, 38.3, 1.2, 18.9),
        m("Nov", 19.1, 38.4, 1.4, 20.3),
        m("Dec", 17.0, 38.5, 1.5, 21.0),
    ],
    marine_life: None,
    climate: None,
};

static BAY_OF_BENGAL: OceanDetails = OceanDetails {
    general_info: "The Bay of Bengal is the largest bay in the world, forming the northeastern part of the \
Indian Ocean. It's bounded by India to the west, Bangladesh to the north, Myanmar to the east, and Sri Lanka to \
the south. Known for its monsoon patterns, tropical cyclones, and significant freshwater input from major rivers.",
    depth: 2600.0,
    monthly: &[
        ts("Jan", 27.5, 33.2),
        ts("Feb", 28.1, 33.3),
        ts("Mar", 28.9, 33.4),
        ts("Apr", 29.5, 33.5),
        ts("May", 30.2, 33.3),
        ts("Jun", 29.8, 33.1),
        ts("Jul", 29.3, 33.0),
        ts("Aug", 29.1, 33.0),
        ts("Sep", 29.6, 33.2),
        ts("Oct", 30.0, 33.4),
        ts("Nov", 29.7, 33.5),
        ts("Dec", 28.2, 33.3),
    ],
    marine_life: None,
    climate: None,
};

static RED_SEA: OceanDetails = OceanDetails {
    general_info: "The Red Sea is a seawater inlet of the Indian Ocean, lying between Africa and Asia. It's \
connected to the ocean via the Bab el Mandeb strait and the Gulf of Aden. Famous for its exceptional coral reefs, \
high salinity, and warm temperatures year-round.",
    depth: 2211.0,
    monthly: &[
        ts("Jan", 24.1, 40.2),
        ts("Feb", 24.8, 40.1),
        ts("Mar", 25.7, 40.0),
        ts("Apr", 26.8, 39.9),
        ts("May", 28.2, 40.0),
        ts("Jun", 29.1, 40.1),
        ts("Jul", 29.3, 40.2),
        ts("Aug", 29.0, 40.1),
        ts("Sep", 28.4, 40.0),
        ts("Oct", 27.2, 39.9),
        ts("Nov", 25.9, 40.0),
        ts("Dec", 24.6, 40.1),
    ],
    marine_life: None,
    climate: None,
};

macro_rules! ocean {
    ($id:expr, $name:expr, $region:expr, $temp:expr, $sal:expr, $wave:expr, $wind:expr,
     $trend:ident, $change:expr, $watch:expr, $details:expr) => {
        Ocean {
            id: $id,
            name: $name,
            region: $region,
            temperature: $temp,
            salinity: $sal,
            wave_height: $wave,
            wind_speed: $wind,
            trend: Trend::$trend,
            change: $change,
            watchlisted: $watch,
            details: $details,
        }
    };
}

/// Dashboard rows in display order.
#[rustfmt::skip]
pub static OCEANS: &[Ocean] = &[
    ocean!("1", "Indian Ocean", "Central Basin", 28.5, 34.7, 2.1, 15.3, Up, 0.3, true, Some(&INDIAN_OCEAN)),
    ocean!("2", "Arabian Sea", "Northern Indian Ocean", 29.2, 36.2, 1.8, 12.7, Down, -0.2, true, Some(&ARABIAN_SEA)),
    ocean!("3", "Pacific Ocean", "Equatorial Pacific", 27.8, 34.2, 2.5, 18.1, Stable, 0.0, false, Some(&PACIFIC_OCEAN)),
    ocean!("4", "Atlantic Ocean", "North Atlantic", 24.1, 35.1, 3.2, 22.4, Up, 0.5, false, Some(&ATLANTIC_OCEAN)),
    ocean!("5", "Bay of Bengal", "Northern Indian Ocean", 29.8, 33.5, 1.6, 14.2, Up, 0.4, true, Some(&BAY_OF_BENGAL)),
    ocean!("6", "Mediterranean Sea", "Central Mediterranean", 23.7, 38.4, 1.2, 18.9, Stable, 0.1, false, Some(&MEDITERRANEAN_SEA)),
    ocean!("7", "Red Sea", "Northern Red Sea", 26.3, 40.0, 1.1, 11.5, Up, 0.2, false, Some(&RED_SEA)),
    ocean!("8", "Caribbean Sea", "Western Caribbean", 28.9, 36.0, 1.9, 16.7, Down, -0.1, true, None),
    ocean!("9", "South China Sea", "Central Basin", 28.1, 34.1, 2.3, 13.8, Stable, 0.0, false, None),
    ocean!("10", "Coral Sea", "Southwest Pacific", 26.4, 35.4, 2.8, 19.3, Up, 0.3, false, None),
    ocean!("11", "Tasman Sea", "Southwest Pacific", 21.2, 35.2, 3.5, 25.1, Down, -0.4, false, None),
    ocean!("12", "Bering Sea", "North Pacific", 8.7, 32.8, 4.1, 28.6, Up, 0.6, true, None),
    ocean!("13", "Gulf of Mexico", "Northwestern Gulf", 27.5, 36.5, 1.7, 14.9, Stable, 0.1, false, None),
    ocean!("14", "North Sea", "Central North Sea", 12.8, 35.0, 2.9, 21.7, Down, -0.3, false, None),
    ocean!("15", "Baltic Sea", "Central Baltic", 15.6, 7.8, 1.4, 17.2, Up, 0.2, false, None),
];
