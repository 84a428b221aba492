use serde::Serialize;

/// Trip itinerary, one entry per calendar day. Static reference data.
#[derive(Serialize, Clone, Copy, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleItem {
    pub date: &'static str,
    pub day: &'static str,
    pub course: Option<&'static str>,
    pub departure: Option<&'static str>,
    pub tee_time: Option<&'static str>,
    pub description: &'static str,
    pub is_special: bool,
}

pub const SCHEDULE: &[ScheduleItem] = &[
    ScheduleItem {
        date: "2025-07-01",
        day: "Tuesday, July 1, 2025",
        course: None,
        departure: None,
        tee_time: None,
        description: "Travel from Faro Airport to Vila Gale Cerro Alagoa",
        is_special: false,
    },
    ScheduleItem {
        date: "2025-07-02",
        day: "Wednesday, July 2, 2025",
        course: Some("NAU Morgado Course"),
        departure: Some("08:30"),
        tee_time: Some("10:12"),
        description: "First round at NAU Morgado Course",
        is_special: false,
    },
    ScheduleItem {
        date: "2025-07-03",
        day: "Thursday, July 3, 2025",
        course: Some("Amendoeira Golf Resort"),
        departure: Some("08:30"),
        tee_time: Some("10:10"),
        description: "Second round at Amendoeira Golf Resort",
        is_special: false,
    },
    ScheduleItem {
        date: "2025-07-04",
        day: "Friday, July 4, 2025",
        course: None,
        departure: None,
        tee_time: None,
        description: "Free Day Activities - Vote for your preferred activities!",
        is_special: true,
    },
    ScheduleItem {
        date: "2025-07-05",
        day: "Saturday, July 5, 2025",
        course: Some("Quinta do Lago South Course"),
        departure: Some("08:30"),
        tee_time: Some("10:24"),
        description: "Final Championship Round at Quinta do Lago South Course",
        is_special: false,
    },
    ScheduleItem {
        date: "2025-07-06",
        day: "Sunday, July 6, 2025",
        course: None,
        departure: None,
        tee_time: None,
        description: "Travel from Vila Gale Cerro Alagoa to Faro Airport",
        is_special: false,
    },
];

/// Fixed fine schedule for side bets.
#[derive(Serialize, Clone, Copy, Debug)]
#[serde(rename_all = "camelCase")]
pub struct StandardFine {
    #[serde(rename = "type")]
    pub fine_type: &'static str,
    pub name: &'static str,
    pub amount: i64,
    pub description: &'static str,
}

pub const STANDARD_FINES: &[StandardFine] = &[
    StandardFine {
        fine_type: "3-putt",
        name: "3 Putt",
        amount: 1,
        description: "Taking three putts on any green",
    },
    StandardFine {
        fine_type: "woody",
        name: "Woody",
        amount: 1,
        description: "Hitting any tree during play",
    },
    StandardFine {
        fine_type: "wetty",
        name: "Wetty",
        amount: 1,
        description: "Ball landing in water hazard",
    },
    StandardFine {
        fine_type: "sandy",
        name: "Sandy",
        amount: 1,
        description: "Ball landing in bunker",
    },
    StandardFine {
        fine_type: "lost-ball",
        name: "Lost Ball",
        amount: 2,
        description: "Losing a ball during play",
    },
    StandardFine {
        fine_type: "air-shot",
        name: "Air Shot",
        amount: 2,
        description: "Completely missing the ball",
    },
    StandardFine {
        fine_type: "ladies-tee",
        name: "Not Clearing Ladies Tee",
        amount: 5,
        description: "Drive failing to pass ladies tee box",
    },
    StandardFine {
        fine_type: "custom",
        name: "Custom Fine",
        amount: 0,
        description: "Add a custom fine with your own amount",
    },
];

/// Free-day activity options put to an informal vote.
#[derive(Serialize, Clone, Copy, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ActivityOption {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: &'static str,
}

pub const ACTIVITY_OPTIONS: &[ActivityOption] = &[
    ActivityOption {
        id: "beach-pescadores",
        name: "Praia dos Pescadores",
        description: "Traditional fishing beach with great restaurants",
        category: "Beach Options",
    },
    ActivityOption {
        id: "beach-oura",
        name: "Praia da Oura",
        description: "Lively beach with water sports and bars",
        category: "Beach Options",
    },
    ActivityOption {
        id: "beach-alemaes",
        name: "Praia dos Alemaes",
        description: "Quiet beach perfect for relaxation",
        category: "Beach Options",
    },
    ActivityOption {
        id: "water-dolphins",
        name: "Dolphin Watching Tours",
        description: "3-hour boat trip to spot dolphins in their natural habitat",
        category: "Water Activities",
    },
    ActivityOption {
        id: "water-caves",
        name: "Sea Cave Exploration",
        description: "Kayak or boat tour through stunning coastal caves",
        category: "Water Activities",
    },
    ActivityOption {
        id: "water-jetski",
        name: "Jet Skiing",
        description: "High-speed thrills along the Algarve coastline",
        category: "Water Activities",
    },
    ActivityOption {
        id: "culture-castle",
        name: "Silves Castle",
        description: "Historic Moorish castle with panoramic views",
        category: "Cultural Experiences",
    },
    ActivityOption {
        id: "culture-oldtown",
        name: "Old Town Albufeira",
        description: "Charming cobbled streets, shops, and traditional cuisine",
        category: "Cultural Experiences",
    },
    ActivityOption {
        id: "culture-winery",
        name: "Local Winery Tours",
        description: "Wine tasting and vineyard tours in the region",
        category: "Cultural Experiences",
    },
    ActivityOption {
        id: "adventure-jeep",
        name: "Jeep Safari",
        description: "Off-road adventure through Portuguese countryside",
        category: "Adventure Activities",
    },
    ActivityOption {
        id: "adventure-gokart",
        name: "Go-kart Racing",
        description: "High-speed racing competition among the group",
        category: "Adventure Activities",
    },
    ActivityOption {
        id: "adventure-zoomarine",
        name: "Zoomarine Theme Park",
        description: "Marine life shows, water rides, and entertainment",
        category: "Adventure Activities",
    },
];
