//! The curated knowledge base shipped with the crate.

use std::collections::HashMap;

use super::table::CategoryTable;
use super::types::{Intensity, NameParts, PainPoint, PriceBracket, ProductConcept};
use super::KnowledgeBase;

use super::types::Intensity::{High, Low, Medium};

const CATEGORIES: &[&str] = &[
    "kitchen gadgets",
    "pet products",
    "travel accessories",
    "home office",
    "fitness equipment",
    "baby products",
    "outdoor gear",
    "bathroom accessories",
    "car accessories",
    "sleep products",
    "cleaning tools",
    "phone accessories",
    "gardening tools",
    "storage solutions",
    "personal care devices",
    "camping gear",
    "desk organization",
    "laundry solutions",
    "shoe care",
    "water bottles",
    "lunch containers",
    "bike accessories",
    "yoga equipment",
    "home gym",
    "meditation aids",
    "journaling supplies",
    "plant care",
    "coffee accessories",
    "wine accessories",
    "grilling tools",
];

const ADJECTIVES: &[&str] = &[
    "Effortless",
    "Clever",
    "Sleek",
    "Intuitive",
    "Rugged",
    "Minimal",
    "Thoughtful",
    "Elegant",
    "Adaptive",
    "Quiet",
    "Compact",
    "Modular",
];

const BENEFITS: &[&str] = &[
    "more time for what actually matters",
    "fewer daily frustrations",
    "results you can feel on day one",
    "a setup that lasts for years",
    "less clutter and more calm",
    "real peace of mind",
    "savings that add up over time",
    "a routine that finally sticks",
    "comfort you notice immediately",
    "one less thing to think about",
];

const VIBES: &[&str] = &[
    "Apple meets IKEA",
    "Muji meets NASA",
    "Patagonia meets Dyson",
    "Scandinavian minimalism meets tech utility",
    "Japanese precision meets spa cleanliness",
    "LEGO meets Bauhaus",
    "Tesla meets farmhouse kitchen",
    "Nintendo meets wellness retreat",
    "Swiss Army Knife meets Kinfolk",
    "Braun meets backyard garden",
    "OXO meets outdoor adventure",
    "Peloton meets zen garden",
];

fn words(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn pains(items: &[(&str, &str, Intensity)]) -> Vec<PainPoint> {
    items
        .iter()
        .map(|(text, source, intensity)| PainPoint::new(*text, *source, *intensity))
        .collect()
}

#[allow(clippy::too_many_arguments)]
fn seed(
    name: &str,
    tagline: &str,
    pain_solved: &str,
    description: &str,
    features: [&str; 4],
    price_point: &str,
    vibe: &str,
    image: &str,
) -> ProductConcept {
    ProductConcept {
        name: name.to_string(),
        tagline: tagline.to_string(),
        pain_solved: pain_solved.to_string(),
        description: description.to_string(),
        features: words(&features),
        price_point: price_point.to_string(),
        vibe: vibe.to_string(),
        image: Some(image.to_string()),
    }
}

impl KnowledgeBase {
    /// The built-in knowledge base.
    pub fn builtin() -> Self {
        Self {
            categories: words(CATEGORIES),
            pain_points: pain_points(),
            mechanisms: mechanisms(),
            name_parts: name_parts(),
            features: features(),
            price_brackets: price_brackets(),
            adjectives: words(ADJECTIVES),
            benefits: words(BENEFITS),
            vibes: words(VIBES),
            seeds: seeds(),
        }
    }
}

fn pain_points() -> HashMap<String, Vec<PainPoint>> {
    let mut map = HashMap::new();
    map.insert(
        "gardening tools".to_string(),
        pains(&[
            ("Constant bending over causes severe back pain", "Reddit/Quora", High),
            ("Tool handles are slippery and cause wrist strain", "Product reviews", High),
            ("Gimmicky tools break after one season", "Permies forum", Medium),
            ("Hard to keep track of small tools while working", "Product reviews", Medium),
            ("Arthritis makes gripping and squeezing painful", "Health blogs", High),
            ("Weeding is endless and back-breaking", "Quora", High),
        ]),
    );
    map.insert(
        "kitchen gadgets".to_string(),
        pains(&[
            ("Drawer clutter - too many single-use tools", "Reddit", High),
            ("Hard to clean gadgets with small crevices", "Amazon reviews", High),
            ("Cheap plastic breaks or melts easily", "Product reviews", Medium),
            ("Confusing controls on digital appliances", "Reddit", Medium),
            ("Counter space is limited", "Home forums", High),
        ]),
    );
    map.insert(
        "sleep products".to_string(),
        pains(&[
            ("Pillows go flat or lose shape quickly", "Amazon reviews", High),
            ("Partner's movement disturbs sleep", "Reddit", High),
            ("Temperature regulation - too hot or cold", "Sleep forums", High),
            ("Alarm clocks are jarring and stressful", "Wellness blogs", Medium),
            ("Blue light from devices disrupts sleep", "Health studies", Medium),
        ]),
    );
    map.insert(
        "home office".to_string(),
        pains(&[
            ("Cable management is a nightmare", "Reddit WFH", High),
            ("Poor posture from bad desk setup", "Ergonomic forums", High),
            ("Video call lighting is unflattering", "Reddit", Medium),
            ("Distractions from household noise", "WFH communities", High),
            ("Desk clutter reduces productivity", "Productivity blogs", Medium),
        ]),
    );
    map.insert(
        "pet products".to_string(),
        pains(&[
            ("Automatic feeders jam or malfunction", "Amazon reviews", High),
            ("Pet hair gets everywhere and is hard to clean", "Reddit pets", High),
            ("Dog walks in rain/cold are miserable", "Pet forums", Medium),
            ("Anxiety when leaving pets alone", "Pet communities", High),
            ("Litter box odor and maintenance", "Cat forums", High),
        ]),
    );
    map.insert(
        "fitness equipment".to_string(),
        pains(&[
            ("Home gym equipment takes too much space", "Reddit fitness", High),
            ("Resistance bands snap or lose elasticity", "Amazon reviews", Medium),
            ("Hard to track form without a mirror/trainer", "Fitness forums", High),
            ("Workout mats slip on hard floors", "Yoga communities", Medium),
            ("Motivation drops when working out alone", "Reddit", High),
        ]),
    );
    map.insert(
        "travel accessories".to_string(),
        pains(&[
            ("Packing cubes still result in wrinkled clothes", "Travel forums", Medium),
            ("Phone/device charging in airports is unreliable", "Reddit travel", High),
            ("Neck pillows are bulky and uncomfortable", "Amazon reviews", High),
            ("Jet lag ruins first days of trips", "Frequent flyer forums", High),
            ("Lost luggage anxiety", "Travel communities", Medium),
        ]),
    );
    map.insert(
        "cleaning tools".to_string(),
        pains(&[
            ("Mops just push dirty water around", "Reddit CleaningTips", High),
            ("Vacuums lose suction or clog constantly", "Amazon reviews", High),
            ("Sponges get smelly and bacteria-ridden quickly", "Home forums", Medium),
            ("Can't reach under furniture or high corners", "Product reviews", Medium),
            ("Toilet brushes are disgusting to store", "Reddit", Low),
        ]),
    );
    map.insert(
        "bathroom accessories".to_string(),
        pains(&[
            ("Mirror fogs up immediately after a shower", "Home forums", Medium),
            ("Toothbrush holders get gross and moldy", "Reddit", High),
            ("Soap dispensers clog or stop pumping", "Amazon reviews", Medium),
            ("Bath mats get mildewy and slip", "Product reviews", High),
            ("No good place to put a phone while showering", "Reddit", Low),
        ]),
    );
    map.insert(
        "car accessories".to_string(),
        pains(&[
            ("Phone mounts fall off or vibrate constantly", "Amazon reviews", High),
            ("Cup holders are too small for modern drinks", "Reddit cars", Medium),
            ("Things fall into the seat gap and vanish", "Car forums", High),
            ("Trash accumulates with nowhere to put it", "Reddit", Medium),
            ("Air fresheners are overwhelming then useless", "Product reviews", Low),
        ]),
    );
    map.insert(
        "baby products".to_string(),
        pains(&[
            ("Strollers are impossible to fold one-handed", "Parenting forums", High),
            ("Bottles leak or cause gas and colic", "Amazon reviews", High),
            ("Car seats are hard to install correctly", "Safety blogs", High),
            ("Baby monitors drop connection at night", "Reddit parenting", Medium),
            ("Clothes have too many snaps for quick changes", "Parenting forums", Medium),
        ]),
    );
    map
}

fn mechanisms() -> CategoryTable<Vec<String>> {
    CategoryTable::new(words(&[
        "a modular snap-together design",
        "a smart companion sensor",
        "a self-cleaning mechanism",
        "a fold-flat frame",
        "an adaptive ergonomic shell",
        "a rechargeable whisper-quiet motor",
    ]))
    .with(
        "kitchen gadgets",
        words(&[
            "a magnetic snap-together tool spine",
            "a self-rinsing micro-jet dock",
            "a fold-flat silicone hinge system",
            "a single-motor modular base",
            "a crevice-free seamless mold",
            "a weighted no-slip countertop footprint",
        ]),
    )
    .with(
        "gardening tools",
        words(&[
            "a low-profile rolling seat with tool holsters",
            "memory-foam grip sleeves",
            "a foot-pedal extraction jaw",
            "an adjustable telescoping shaft",
            "a soil-moisture sensing stake",
            "rust-proof powder-coated steel heads",
        ]),
    )
    .with(
        "pet products",
        words(&[
            "a treat-tossing camera arm",
            "a hair-trapping breathable mesh",
            "a jam-proof auger dispenser",
            "an odor-locking carbon filter",
            "a weighted tip-proof base",
            "a calming pheromone diffuser",
        ]),
    )
    .with(
        "sleep products",
        words(&[
            "replaceable air-cell inserts",
            "a phase-change cooling fabric",
            "gradual warm-light wake cycles",
            "independent motion-isolating coils",
            "a contoured zero-pressure eye cup",
            "a non-looping adaptive sound engine",
        ]),
    )
    .with(
        "home office",
        words(&[
            "a desk-mounted magnetic cable channel",
            "a collar-clip posture sensor",
            "a diffused ring-light panel",
            "a directional noise-masking speaker",
            "a gas-spring monitor riser",
            "a drop-in modular desk tray",
        ]),
    )
    .with(
        "fitness equipment",
        words(&[
            "a mirror-hidden digital cable system",
            "carbon-infused resistance polymer",
            "a camera-free form tracking sensor",
            "a micro-suction grip underside",
            "a dial-select weight stack",
            "a wall-folding steel frame",
        ]),
    )
    .with(
        "travel accessories",
        words(&[
            "a forward-lean inflatable brace",
            "a built-in 10,000mAh power cell",
            "a compression steam-release pouch",
            "a light-therapy visor timer",
            "a leak-locking twist valve",
            "a GPS-enabled luggage tag",
        ]),
    )
    .with(
        "water bottles",
        words(&[
            "a self-cleaning UV cap",
            "a double-wall vacuum core",
            "a sip-tracking smart base",
            "a one-hand leakproof latch",
            "a collapsible silicone body",
            "a built-in fruit infuser",
        ]),
    )
    .with(
        "cleaning tools",
        words(&[
            "a dual-tank clean and dirty water system",
            "a cyclone clog-free chamber",
            "a pressure-stable trigger pump",
            "antimicrobial silver-infused fibers",
            "a flexible low-profile reach arm",
            "a drip-dry ventilated caddy",
        ]),
    )
}

fn name_parts() -> CategoryTable<NameParts> {
    CategoryTable::new(NameParts::new(
        &["Nova", "Flux", "Pulse", "Zen", "Arc", "Core", "Wave", "Loop", "Sync", "Glide"],
        &["Pro", "One", "Max", "Air", "Flow", "Hub", "Mate", "Pad", "Ring", "Box"],
    ))
    .with(
        "kitchen gadgets",
        NameParts::new(
            &["Chop", "Stack", "Prep", "Whisk", "Sear", "Zest", "Clean"],
            &["Smart", "Cut", "Dock", "Mate", "Pro", "Nest"],
        ),
    )
    .with(
        "gardening tools",
        NameParts::new(
            &["Terra", "Grip", "Weed", "Root", "Sprout", "Bloom", "Soil"],
            &["Glide", "Shift", "Walk", "Ease", "Mate", "Tend"],
        ),
    )
    .with(
        "pet products",
        NameParts::new(
            &["Paw", "Wag", "Purr", "Fetch", "Shed", "Tail"],
            &["Pod", "Pal", "Guard", "Shield", "Nest", "Buddy"],
        ),
    )
    .with(
        "sleep products",
        NameParts::new(
            &["Drift", "Cloud", "Dream", "Lull", "Hush", "Nod"],
            &["Band", "Core", "Nest", "Well", "Rest", "Wave"],
        ),
    )
    .with(
        "home office",
        NameParts::new(
            &["Cable", "Desk", "Focus", "Posture", "Task", "Work"],
            &["Canvas", "Ping", "Flow", "Dock", "Hub", "Zone"],
        ),
    )
    .with(
        "fitness equipment",
        NameParts::new(
            &["Band", "Rep", "Lift", "Flex", "Core", "Wall"],
            &["Mate", "Gym", "Fit", "Forge", "Pro", "Max"],
        ),
    )
    .with(
        "travel accessories",
        NameParts::new(
            &["Jet", "Roam", "Trek", "Power", "Pack", "Nomad"],
            &["Nap", "Go", "Kit", "Pal", "Port", "Cube"],
        ),
    )
    .with(
        "water bottles",
        NameParts::new(
            &["Hydro", "Sip", "Aqua", "Flow", "Chill"],
            &["Loop", "Pure", "Flask", "Well", "Mate"],
        ),
    )
    .with(
        "cleaning tools",
        NameParts::new(
            &["Scrub", "Sweep", "Gleam", "Spot", "Dust"],
            &["Bot", "Pro", "Wand", "Mate", "Mop"],
        ),
    )
    .with(
        "baby products",
        NameParts::new(
            &["Tot", "Coo", "Snug", "Bub", "Tiny"],
            &["Safe", "Pod", "Nest", "Care", "Pal"],
        ),
    )
    .with(
        "car accessories",
        NameParts::new(
            &["Dash", "Road", "Cruise", "Drive", "Lane"],
            &["Mount", "Mate", "Grip", "Dock", "Pod"],
        ),
    )
}

fn features() -> CategoryTable<Vec<String>> {
    CategoryTable::new(words(&[
        "App-connected controls",
        "Recycled materials",
        "Lifetime warranty",
        "Dishwasher-safe parts",
        "USB-C rechargeable",
        "Modular design",
        "Whisper-quiet operation",
        "Compact storage",
        "Tool-free setup",
        "30-day home trial",
    ]))
    .with(
        "kitchen gadgets",
        words(&[
            "Self-cleaning dock",
            "Dishwasher safe",
            "Magnetic storage",
            "Cut-resistant handle",
            "12 configurations",
            "Food-grade silicone",
            "Stackable parts",
            "One-hand operation",
        ]),
    )
    .with(
        "gardening tools",
        words(&[
            "No bending required",
            "Arthritis-friendly grip",
            "Weatherproof finish",
            "All-terrain wheels",
            "Integrated tool slots",
            "Adjustable height",
            "High-vis colors",
            "Rust-proof steel",
        ]),
    )
    .with(
        "pet products",
        words(&[
            "Machine washable",
            "Chew-resistant build",
            "Two-way audio",
            "Treat tosser",
            "Odor-locking filter",
            "Tip-proof base",
            "Size adjustable",
            "Vet-approved materials",
        ]),
    )
    .with(
        "sleep products",
        words(&[
            "Cooling cover",
            "Adjustable loft",
            "Silent wake technology",
            "Sleep stage tracking",
            "7-day battery",
            "Machine washable",
            "Hypoallergenic fill",
            "10-year warranty",
        ]),
    )
    .with(
        "home office",
        words(&[
            "Tool-free installation",
            "Magnetic cable clips",
            "Qi charging zone",
            "4-port USB hub",
            "Haptic posture alerts",
            "Dimmable light panel",
            "Noise-masking audio",
            "Fits any desk",
        ]),
    )
    .with(
        "fitness equipment",
        words(&[
            "Zero footprint",
            "Form correction feedback",
            "Force tracking",
            "Smart handles",
            "Non-slip base",
            "Live classes",
            "Lifetime warranty",
            "Quick-change weights",
        ]),
    )
    .with(
        "travel accessories",
        words(&[
            "Phone-sized packability",
            "Integrated power bank",
            "Global compatibility",
            "Washable face pad",
            "TSA-friendly",
            "Leak-proof seals",
            "Airflow channels",
            "GPS tracking",
        ]),
    )
    .with(
        "water bottles",
        words(&[
            "Leakproof lid",
            "24-hour cold",
            "UV self-cleaning",
            "Hydration reminders",
            "Fits cup holders",
            "BPA-free",
            "One-hand sipping",
            "Dishwasher safe",
        ]),
    )
    .with(
        "cleaning tools",
        words(&[
            "Dual-tank system",
            "Clog-free design",
            "Antimicrobial fibers",
            "Reaches under furniture",
            "Cordless power",
            "Drip-dry storage",
            "Washable pads",
            "Refillable tank",
        ]),
    )
}

fn price_brackets() -> CategoryTable<PriceBracket> {
    [
        ("kitchen gadgets", 19, 89),
        ("pet products", 25, 199),
        ("travel accessories", 19, 99),
        ("home office", 39, 249),
        ("fitness equipment", 79, 499),
        ("baby products", 29, 249),
        ("outdoor gear", 39, 299),
        ("bathroom accessories", 15, 79),
        ("car accessories", 15, 89),
        ("sleep products", 39, 199),
        ("cleaning tools", 15, 129),
        ("phone accessories", 12, 69),
        ("gardening tools", 19, 129),
        ("storage solutions", 19, 149),
        ("personal care devices", 29, 179),
        ("camping gear", 39, 249),
        ("desk organization", 15, 89),
        ("laundry solutions", 19, 119),
        ("shoe care", 12, 59),
        ("water bottles", 29, 59),
        ("lunch containers", 15, 49),
        ("bike accessories", 19, 149),
        ("yoga equipment", 25, 129),
        ("home gym", 149, 999),
        ("meditation aids", 19, 99),
        ("journaling supplies", 12, 49),
        ("plant care", 15, 99),
        ("coffee accessories", 19, 129),
        ("wine accessories", 19, 99),
        ("grilling tools", 25, 149),
    ]
    .into_iter()
    .fold(
        CategoryTable::new(PriceBracket::new(29, 149)),
        |table, (category, min, max)| table.with(category, PriceBracket::new(min, max)),
    )
}

fn seeds() -> HashMap<String, Vec<ProductConcept>> {
    let mut map = HashMap::new();
    map.insert(
        "gardening tools".to_string(),
        vec![
            seed(
                "TerraGlide",
                "The rolling garden seat that follows you",
                "Constant bending over causes severe back pain",
                "A low-profile wheeled garden seat with built-in tool holsters and a pivoting work tray. Roll from plant to plant without standing up. Ergonomic kneeling pad flips down for ground-level work.",
                ["360° swivel seat", "Integrated tool slots", "All-terrain wheels", "Weatherproof cushion"],
                "$89",
                "Gardening meets mobility scooter elegance",
                "seed-images/terraglide.png",
            ),
            seed(
                "GripShift",
                "Handles that adapt to your hands",
                "Tool handles are slippery and cause wrist strain",
                "Universal ergonomic handle sleeves that retrofit onto any garden tool. Memory foam core with textured silicone grip. Reduces grip force needed by 40%.",
                ["Fits any handle 0.75-1.5\"", "Arthritis-friendly", "Machine washable", "High-vis colors"],
                "$24",
                "OXO Good Grips meets garden aesthetic",
                "seed-images/gripshift.png",
            ),
            seed(
                "WeedWalk",
                "Pull weeds standing tall",
                "Weeding is endless and back-breaking",
                "A walking-stick style weeder with a foot pedal mechanism. Step, twist, and the serrated jaws grip and extract weeds root-and-all. Eject button drops weeds into an attached collection bag.",
                ["No bending required", "Extracts 2\" taproots", "Compostable collection bags", "Adjustable height"],
                "$65",
                "Cane meets precision tool",
                "seed-images/weedwalk.png",
            ),
        ],
    );
    map.insert(
        "kitchen gadgets".to_string(),
        vec![
            seed(
                "CleanCut",
                "The kitchen tool that cleans itself",
                "Hard to clean gadgets with small crevices",
                "A mandoline slicer with a built-in cleaning dock. After use, snap it into the dock, add water, and micro-jets blast away residue. UV sanitizes in 60 seconds.",
                ["Self-cleaning dock", "5 blade options", "Cut-resistant handle", "Magnetic storage"],
                "$79",
                "Japanese precision meets spa cleanliness",
                "seed-images/cleancut.png",
            ),
            seed(
                "StackSmart",
                "One tool. Infinite configurations.",
                "Drawer clutter - too many single-use tools",
                "Modular kitchen tool system with magnetic snap-together components. Spatula head plus whisk attachment plus scraper makes 12 tools in one drawer slot.",
                ["12 configurations", "Dishwasher safe", "Hangs or stores flat", "Lifetime warranty"],
                "$55",
                "LEGO for grown-up kitchens",
                "seed-images/stacksmart.png",
            ),
        ],
    );
    map.insert(
        "sleep products".to_string(),
        vec![
            seed(
                "DriftBand",
                "Wake gently. Sleep deeply.",
                "Alarm clocks are jarring and stressful",
                "A soft fabric wristband that wakes you with gradual warming and gentle haptic pulses, no sound. Tracks sleep stages to wake you at the optimal moment within your window.",
                ["Silent wake technology", "Sleep stage tracking", "7-day battery", "Machine washable band"],
                "$129",
                "Spa meets sleep science",
                "seed-images/driftband.png",
            ),
            seed(
                "CloudCore",
                "The pillow that never goes flat",
                "Pillows go flat or lose shape quickly",
                "Modular pillow with replaceable air-cell inserts. When loft decreases, swap in fresh cells. Outer cover is cooling bamboo.",
                ["Adjustable loft", "Subscription refills", "Cooling cover", "10-year core warranty"],
                "$149",
                "Subscription economy meets sleep luxury",
                "seed-images/cloudcore.png",
            ),
        ],
    );
    map.insert(
        "home office".to_string(),
        vec![
            seed(
                "CableCanvas",
                "Your desk's hidden nervous system",
                "Cable management is a nightmare",
                "A desk-mounted fabric panel with integrated cable channels and magnetic attachment points. Route, hide, and swap cables without tools.",
                ["Tool-free installation", "Magnetic cable clips", "Qi charging zone", "4-port USB hub"],
                "$89",
                "Scandinavian minimalism meets tech utility",
                "seed-images/cablecanvas.png",
            ),
            seed(
                "PosturePing",
                "Correct your spine, invisibly",
                "Poor posture from bad desk setup",
                "A tiny sensor that magnetically clips to your collar. Detects slouching and gently vibrates when you need to correct. The app tracks long-term spinal health.",
                ["Discreet design", "Haptic feedback", "30-day battery", "Health app integration"],
                "$49",
                "Apple AirTag meets medical device",
                "seed-images/postureping.png",
            ),
        ],
    );
    map.insert(
        "pet products".to_string(),
        vec![
            seed(
                "PawPod",
                "See them. Treat them. From anywhere.",
                "Anxiety when leaving pets alone",
                "360-degree pet camera with treat tossing and a calming pheromone diffuser. Two-way audio lets you talk to them.",
                ["360° 4K camera", "Pheromone diffuser", "Treat tosser", "Cry detection"],
                "$199",
                "Nest Cam meets dog whisperer",
                "seed-images/pawpod.png",
            ),
            seed(
                "ShedShield",
                "Stop the shed before it spreads",
                "Pet hair gets everywhere and is hard to clean",
                "A wearable pet vest for indoor use made from breathable, hair-trapping mesh. Loose hair is captured in the fabric weave. Shake it out outside once a day.",
                ["Breathable mesh", "Machine washable", "Calming compression effect", "Size adjustable"],
                "$35",
                "Athleisure for dogs",
                "seed-images/shedshield.png",
            ),
        ],
    );
    map.insert(
        "fitness equipment".to_string(),
        vec![
            seed(
                "WallGym Pro",
                "A full gym that disappears",
                "Home gym equipment takes too much space",
                "A sleek, full-length mirror that conceals a high-torque digital cable resistance system. When off, it's just a mirror. When on, it's a trainer with 200lbs of resistance.",
                ["Zero footprint", "200lb digital weight", "Form correction AI", "Live classes"],
                "$1495",
                "Mirror meets Tesla",
                "seed-images/wallgym-pro.png",
            ),
            seed(
                "BandMate",
                "Elasticity that lasts forever",
                "Resistance bands snap or lose elasticity",
                "Smart resistance bands made from carbon-infused polymer that never snaps or stretches out. Sensors in the handles track reps, force, and velocity.",
                ["Unbreakable material", "Force tracking", "Smart handles", "Lifetime warranty"],
                "$79",
                "Carbon fiber meets CrossFit",
                "seed-images/bandmate.png",
            ),
        ],
    );
    map.insert(
        "travel accessories".to_string(),
        vec![
            seed(
                "JetNap",
                "First class sleep in economy",
                "Neck pillows are bulky and uncomfortable",
                "An inflatable sleep system that braces against the tray table to support your head forward, not sideways. Deflates to the size of a phone.",
                ["Forward-lean support", "Phone-sized packability", "Washable face pad", "Airflow channels"],
                "$45",
                "Massage chair meets camping gear",
                "seed-images/jetnap.png",
            ),
            seed(
                "PowerPort",
                "The last adapter you'll ever buy",
                "Phone/device charging in airports is unreliable",
                "Universal travel adapter with a built-in 10,000mAh power bank. Plug it into the wall to charge devices and the internal battery, then keep charging on the go.",
                ["Integrated power bank", "65W fast charge", "Global compatibility", "Compact cube design"],
                "$89",
                "Anker meets Swiss Army Knife",
                "seed-images/powerport.png",
            ),
        ],
    );
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_is_valid() {
        let kb = KnowledgeBase::builtin();
        assert!(kb.validate().is_ok(), "{:?}", kb.validate().err());
    }

    #[test]
    fn test_builtin_name_parts_fit_display_width() {
        let kb = KnowledgeBase::builtin();
        for (category, parts) in kb.name_parts.iter() {
            let longest_prefix = parts.prefixes.iter().map(|p| p.chars().count()).max();
            let longest_suffix = parts.suffixes.iter().map(|s| s.chars().count()).max();
            let total = longest_prefix.unwrap_or(0) + longest_suffix.unwrap_or(0);
            assert!(total <= 15, "{} can produce {}-char names", category, total);
        }
    }

    #[test]
    fn test_builtin_seed_prices_are_plain_dollars() {
        let kb = KnowledgeBase::builtin();
        for concept in kb.all_seeds() {
            let digits = concept.price_point.strip_prefix('$').unwrap_or("");
            assert!(
                !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()),
                "{} has price {}",
                concept.name,
                concept.price_point
            );
            assert_eq!(concept.features.len(), 4);
        }
    }

    #[test]
    fn test_water_bottle_bracket() {
        let kb = KnowledgeBase::builtin();
        assert_eq!(kb.price_bracket("water bottles"), PriceBracket::new(29, 59));
    }

    #[test]
    fn test_every_pain_category_is_listed() {
        let kb = KnowledgeBase::builtin();
        for category in kb.pain_points.keys() {
            assert!(kb.categories.contains(category), "{} not listed", category);
        }
    }
}
