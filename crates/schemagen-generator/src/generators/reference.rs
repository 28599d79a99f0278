//! Fixed reference lists that name-like generators draw from.

pub const FIRST_NAMES: &[&str] = &[
    "James", "Mary", "Robert", "Patricia", "John", "Jennifer", "Michael", "Linda", "David",
    "Elizabeth", "William", "Barbara", "Richard", "Susan", "Joseph", "Jessica", "Thomas",
    "Sarah", "Charles", "Karen", "Christopher", "Lisa", "Daniel", "Nancy", "Matthew", "Betty",
    "Anthony", "Margaret", "Mark", "Sandra", "Donald", "Ashley", "Steven", "Kimberly", "Paul",
    "Emily", "Andrew", "Donna", "Joshua", "Michelle", "Kenneth", "Carol", "Kevin", "Amanda",
    "Brian", "Melissa", "George", "Deborah", "Timothy", "Stephanie",
];

pub const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson", "White", "Harris", "Sanchez",
    "Clark", "Ramirez", "Lewis", "Robinson", "Walker", "Young", "Allen", "King", "Wright",
    "Scott", "Torres", "Nguyen", "Hill", "Flores", "Green", "Adams", "Nelson", "Baker", "Hall",
    "Rivera", "Campbell", "Mitchell", "Carter", "Roberts",
];

pub const STREET_NAMES: &[&str] = &[
    "Main St", "Oak Ave", "Pine St", "Maple Ave", "Cedar Ln", "Elm St", "Washington Blvd",
    "Lake View Dr", "Hillside Rd", "Park Ave", "Sunset Blvd", "River Rd", "Church St",
    "Highland Ave", "Mill Rd", "Spring St", "Walnut St", "Chestnut St", "Meadow Ln",
    "Forest Dr", "Franklin St", "Jefferson Ave", "Lincoln Way", "Madison Ct", "Jackson St",
];

pub const CITIES: &[&str] = &[
    "New York", "Los Angeles", "Chicago", "Houston", "Phoenix", "Philadelphia", "San Antonio",
    "San Diego", "Dallas", "Austin", "Jacksonville", "Columbus", "Charlotte", "Indianapolis",
    "Seattle", "Denver", "Boston", "Nashville", "Portland", "Las Vegas", "Detroit", "Memphis",
    "Louisville", "Baltimore", "Milwaukee", "Albuquerque", "Tucson", "Fresno", "Sacramento",
    "Atlanta", "Omaha", "Raleigh", "Miami", "Minneapolis", "Tulsa", "Cleveland",
];

/// US two-letter state codes, including DC.
pub const STATES: &[&str] = &[
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "DC", "FL", "GA", "HI", "ID", "IL", "IN",
    "IA", "KS", "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH",
    "NJ", "NM", "NY", "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT",
    "VT", "VA", "WA", "WV", "WI", "WY",
];

pub const EMAIL_DOMAINS: &[&str] = &[
    "example.com", "example.org", "example.net", "mail.test", "inbox.test", "corp.example",
];

pub const LOREM_WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna", "aliqua",
];

pub const PRODUCT_ADJECTIVES: &[&str] = &[
    "Ergonomic", "Rustic", "Sleek", "Intelligent", "Gorgeous", "Incredible", "Practical",
    "Refined", "Handcrafted", "Durable", "Lightweight", "Compact", "Premium", "Wireless",
    "Smart",
];

pub const PRODUCT_NOUNS: &[&str] = &[
    "Chair", "Table", "Lamp", "Keyboard", "Mouse", "Speaker", "Backpack", "Bottle", "Watch",
    "Headphones", "Jacket", "Shoes", "Camera", "Monitor", "Blender", "Kettle", "Router",
];

pub const PRODUCT_TYPES: &[&str] = &[
    "Electronics", "Furniture", "Clothing", "Kitchen", "Sports", "Toys", "Books", "Garden",
    "Automotive", "Health", "Beauty", "Office Supplies", "Tools", "Grocery",
];

pub const MANUFACTURERS: &[&str] = &[
    "Acme Corp", "Globex", "Initech", "Umbrella Industries", "Stark Manufacturing",
    "Wayne Enterprises", "Hooli", "Vandelay Industries", "Soylent Co", "Tyrell Systems",
    "Cyberdyne", "Wonka Works",
];
