//! Keyword tables used to place a bird into a habitat zone.
//!
//! Name tables are matched against both the bird name and the family name.
//! Family tables hold taxonomic family strings and are only consulted once no
//! name table matched. All entries are lowercase.

pub const WOODPECKER_KEYWORDS: &[&str] = &[
    "woodpecker",
    "pecker",
    "flicker",
    "sapsucker",
    "downy",
    "pileated",
];

pub const HUMMINGBIRD_KEYWORDS: &[&str] = &[
    "hummingbird",
    "ruby-throated",
    "annas",
    "rufous",
    "calliope",
];

pub const WATER_KEYWORDS: &[&str] = &[
    "duck",
    "goose",
    "swan",
    "pelican",
    "cormorant",
    "heron",
    "egret",
    "crane",
    "stork",
    "ibis",
    "flamingo",
    "loon",
    "grebe",
    "coot",
    "moorhen",
    "gallinule",
    "tern",
    "gull",
    "seagull",
    "albatross",
    "petrel",
    "shearwater",
    "gannet",
    "booby",
    "frigatebird",
    "anhinga",
    "bittern",
    "rail",
    "sandpiper",
    "plover",
    "turnstone",
    "avocet",
    "stilt",
    "oystercatcher",
    "curlew",
    "godwit",
    "snipe",
    "phalarope",
    "mallard",
    "canada",
];

pub const SKY_KEYWORDS: &[&str] = &[
    "eagle",
    "hawk",
    "falcon",
    "kestrel",
    "osprey",
    "vulture",
    "condor",
    "kite",
    "harrier",
    "goshawk",
    "sparrowhawk",
    "buzzard",
    "swift",
    "swallow",
    "martin",
    "nighthawk",
    "whippoorwill",
    "chimney",
    "red-tailed",
    "bald",
    "peregrine",
];

pub const GROUND_KEYWORDS: &[&str] = &[
    "quail",
    "pheasant",
    "grouse",
    "ptarmigan",
    "prairie",
    "chicken",
    "turkey",
    "roadrunner",
    "killdeer",
    "pipit",
    "lark",
    "bunting",
    "towhee",
    "dove",
    "pigeon",
    "partridge",
    "francolin",
    "guineafowl",
    "peacock",
    "peafowl",
];

pub const WOODPECKER_FAMILIES: &[&str] = &["picidae", "woodpecker"];

pub const HUMMINGBIRD_FAMILIES: &[&str] = &["trochilidae", "hummingbird"];

pub const WATER_FAMILIES: &[&str] = &[
    "anatidae",
    "pelecanidae",
    "ardeidae",
    "gruidae",
    "phoenicopteridae",
    "gaviidae",
    "podicipedidae",
    "rallidae",
    "laridae",
    "procellariidae",
    "sulidae",
    "fregatidae",
    "scolopacidae",
    "charadriidae",
    "recurvirostridae",
    "waterfowl",
];

pub const SKY_FAMILIES: &[&str] = &[
    "accipitridae",
    "falconidae",
    "cathartidae",
    "pandionidae",
    "apodidae",
    "hirundinidae",
    "caprimulgidae",
    "raptors",
];

pub const GROUND_FAMILIES: &[&str] = &[
    "phasianidae",
    "odontophoridae",
    "meleagrididae",
    "cariamidae",
    "alaudidae",
    "motacillidae",
    "emberizidae",
    "columbidae",
];
