//! Embedded English sentiment lexicon.
//!
//! Entries are `(word, polarity, subjectivity)` with polarity in [-1, 1] and
//! subjectivity in [0, 1], mostly adjectives.

pub const WORDS: &[(&str, f64, f64)] = &[
    // positive
    ("amazing", 0.6, 0.9),
    ("awesome", 1.0, 1.0),
    ("beautiful", 0.85, 1.0),
    ("best", 1.0, 0.3),
    ("better", 0.5, 0.5),
    ("brilliant", 0.9, 1.0),
    ("calm", 0.3, 0.75),
    ("charming", 0.7, 0.9),
    ("cheap", 0.4, 0.7),
    ("cheerful", 0.8, 1.0),
    ("clean", 0.37, 0.69),
    ("clever", 0.5, 0.8),
    ("comfortable", 0.4, 0.8),
    ("cool", 0.35, 0.65),
    ("delicious", 1.0, 1.0),
    ("delight", 0.7, 0.8),
    ("delighted", 0.7, 0.8),
    ("delightful", 1.0, 1.0),
    ("easy", 0.43, 0.83),
    ("effective", 0.6, 0.8),
    ("efficient", 0.5, 0.6),
    ("elegant", 0.7, 0.9),
    ("enjoy", 0.4, 0.5),
    ("enjoyable", 0.5, 0.6),
    ("enjoyed", 0.4, 0.5),
    ("excellent", 1.0, 1.0),
    ("exceptional", 0.67, 1.0),
    ("exciting", 0.3, 0.8),
    ("fabulous", 0.4, 0.9),
    ("fantastic", 0.4, 0.9),
    ("fast", 0.2, 0.6),
    ("favorite", 0.5, 1.0),
    ("fine", 0.42, 0.5),
    ("fun", 0.3, 0.2),
    ("funny", 0.25, 1.0),
    ("generous", 0.6, 0.8),
    ("gentle", 0.3, 0.6),
    ("glad", 0.5, 1.0),
    ("good", 0.7, 0.6),
    ("gorgeous", 0.7, 1.0),
    ("great", 0.8, 0.75),
    ("happy", 0.8, 1.0),
    ("helpful", 0.5, 0.6),
    ("honest", 0.6, 0.9),
    ("impressive", 1.0, 1.0),
    ("incredible", 0.9, 0.9),
    ("interesting", 0.5, 0.5),
    ("joy", 0.8, 0.9),
    ("kind", 0.6, 0.9),
    ("like", 0.2, 0.3),
    ("liked", 0.3, 0.4),
    ("love", 0.5, 0.6),
    ("loved", 0.7, 0.8),
    ("lovely", 0.5, 0.75),
    ("loving", 0.6, 0.6),
    ("lucky", 0.33, 1.0),
    ("magnificent", 1.0, 1.0),
    ("marvelous", 0.8, 0.9),
    ("nice", 0.6, 1.0),
    ("outstanding", 0.5, 0.67),
    ("perfect", 1.0, 1.0),
    ("pleasant", 0.73, 0.97),
    ("pleased", 0.5, 1.0),
    ("positive", 0.23, 0.55),
    ("powerful", 0.3, 1.0),
    ("pretty", 0.25, 1.0),
    ("proud", 0.8, 1.0),
    ("recommend", 0.4, 0.5),
    ("reliable", 0.5, 0.6),
    ("remarkable", 0.75, 0.75),
    ("satisfied", 0.5, 1.0),
    ("smart", 0.21, 0.64),
    ("smooth", 0.4, 0.6),
    ("solid", 0.3, 0.4),
    ("splendid", 1.0, 1.0),
    ("strong", 0.43, 0.73),
    ("success", 0.3, 0.4),
    ("successful", 0.75, 0.95),
    ("superb", 1.0, 1.0),
    ("sweet", 0.35, 0.65),
    ("terrific", 1.0, 1.0),
    ("thank", 0.2, 0.2),
    ("thanks", 0.2, 0.2),
    ("thrilled", 0.6, 0.9),
    ("useful", 0.3, 0.0),
    ("valuable", 0.5, 0.6),
    ("warm", 0.6, 0.6),
    ("welcome", 0.8, 0.9),
    ("well", 0.2, 0.3),
    ("win", 0.8, 0.4),
    ("wonderful", 1.0, 1.0),
    ("worth", 0.3, 0.1),
    // negative
    ("abysmal", -1.0, 1.0),
    ("angry", -0.5, 1.0),
    ("annoyed", -0.4, 0.8),
    ("annoying", -0.8, 0.9),
    ("anxious", -0.25, 0.75),
    ("awful", -1.0, 1.0),
    ("bad", -0.7, 0.67),
    ("boring", -1.0, 1.0),
    ("broken", -0.4, 0.4),
    ("careless", -0.5, 0.8),
    ("confusing", -0.3, 0.6),
    ("cruel", -1.0, 1.0),
    ("damaged", -0.4, 0.5),
    ("dangerous", -0.6, 0.9),
    ("dead", -0.2, 0.4),
    ("defective", -0.5, 0.6),
    ("depressed", -0.6, 0.8),
    ("difficult", -0.5, 1.0),
    ("dirty", -0.6, 0.8),
    ("disappointed", -0.75, 0.75),
    ("disappointing", -0.6, 0.7),
    ("disgusting", -1.0, 1.0),
    ("dreadful", -1.0, 1.0),
    ("dull", -0.31, 0.69),
    ("evil", -1.0, 1.0),
    ("fail", -0.5, 0.3),
    ("failed", -0.5, 0.3),
    ("failure", -0.32, 0.3),
    ("fake", -0.5, 1.0),
    ("frustrated", -0.7, 0.7),
    ("frustrating", -0.4, 0.7),
    ("guilty", -0.5, 0.6),
    ("hard", -0.29, 0.54),
    ("harmful", -0.6, 0.8),
    ("hate", -0.8, 0.9),
    ("hated", -0.9, 0.7),
    ("horrible", -1.0, 1.0),
    ("hurt", -0.3, 0.5),
    ("ill", -0.5, 0.8),
    ("inferior", -0.6, 0.8),
    ("lazy", -0.25, 1.0),
    ("lonely", -0.5, 0.9),
    ("lose", -0.3, 0.3),
    ("lost", -0.3, 0.3),
    ("mad", -0.62, 1.0),
    ("mediocre", -0.5, 0.5),
    ("mess", -0.3, 0.5),
    ("miserable", -1.0, 1.0),
    ("negative", -0.3, 0.4),
    ("nasty", -1.0, 1.0),
    ("painful", -0.7, 0.9),
    ("pathetic", -1.0, 1.0),
    ("poor", -0.4, 0.6),
    ("problem", -0.2, 0.3),
    ("rude", -0.3, 0.6),
    ("sad", -0.5, 1.0),
    ("scary", -0.5, 1.0),
    ("shame", -0.5, 0.7),
    ("sick", -0.71, 0.86),
    ("slow", -0.3, 0.39),
    ("stupid", -0.8, 1.0),
    ("terrible", -1.0, 1.0),
    ("tired", -0.4, 0.7),
    ("ugly", -0.7, 1.0),
    ("unfortunate", -0.5, 0.9),
    ("unhappy", -0.6, 0.9),
    ("unpleasant", -0.7, 1.0),
    ("upset", -0.5, 0.8),
    ("useless", -0.5, 0.2),
    ("waste", -0.2, 0.1),
    ("weak", -0.38, 0.62),
    ("worse", -0.4, 0.6),
    ("worst", -1.0, 1.0),
    ("wrong", -0.5, 0.9),
];

/// Words that scale the next scored word by the given factor.
pub const INTENSIFIERS: &[(&str, f64)] = &[
    ("absolutely", 1.5),
    ("extremely", 1.5),
    ("highly", 1.3),
    ("incredibly", 1.5),
    ("most", 1.3),
    ("quite", 1.1),
    ("really", 1.3),
    ("so", 1.3),
    ("too", 1.2),
    ("totally", 1.4),
    ("truly", 1.3),
    ("very", 1.3),
    ("barely", 0.5),
    ("hardly", 0.5),
    ("slightly", 0.6),
    ("somewhat", 0.8),
];

/// Words that flip the next scored word; the polarity is multiplied by
/// [`NEGATION_FACTOR`].
pub const NEGATORS: &[&str] = &["not", "no", "never", "nothing", "neither", "nor", "without"];

pub const NEGATION_FACTOR: f64 = -0.5;

/// Extra polarity magnitude per `!` following a scored word.
pub const EXCLAMATION_BOOST: f64 = 0.05;
pub const MAX_EXCLAMATIONS: usize = 3;
