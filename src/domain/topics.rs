//! Static topic catalog.
//!
//! Hand-curated list of desired stories, ordered roughly by level. The
//! planner turns this into pending work by skipping topics whose slug
//! already exists in the store, so entries can be appended freely without
//! regenerating anything.

use super::story::{Category, CefrLevel};

/// One desired story: level, genre, and a free-text topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopicSpec {
    pub level: CefrLevel,
    pub category: Category,
    pub topic: &'static str,
}

macro_rules! topic {
    ($level:ident, $category:ident, $topic:expr) => {
        TopicSpec {
            level: CefrLevel::$level,
            category: Category::$category,
            topic: $topic,
        }
    };
}

/// The full compiled-in catalog, in planning order.
pub const CATALOG: &[TopicSpec] = &[
    // A1
    topic!(A1, News, "A new bakery opens in a small German town"),
    topic!(A1, News, "A dog becomes the mascot of a local football team"),
    topic!(A1, News, "A city gives free bus tickets to children"),
    topic!(A1, News, "A zoo welcomes baby penguins"),
    topic!(A1, News, "A library opens on Sundays for the first time"),
    topic!(A1, News, "Children clean up a park in Hamburg"),
    topic!(A1, Story, "A cat is found after three weeks missing"),
    topic!(A1, Story, "A farmer saves a duck family from a road"),
    topic!(A1, Blog, "My pet rabbit"),
    topic!(A1, Blog, "Learning to swim"),
    topic!(A1, Blog, "What I eat for breakfast"),
    topic!(A1, Blog, "The bus ride to school"),
    topic!(A1, Blog, "My best friend"),
    topic!(A1, Journal, "A short diary entry about a school day"),
    topic!(A1, Journal, "Diary: my first day in a new city"),
    topic!(A1, Journal, "Diary: a rainy Saturday at home"),
    topic!(A1, Journal, "Diary: my first swimming lesson"),
    topic!(A1, Poem, "A simple poem about the four seasons"),
    // A2
    topic!(A2, News, "A new train line connects two German cities"),
    topic!(A2, News, "Germans travel more by bicycle than before"),
    topic!(A2, News, "A town in Bavaria bans plastic bags"),
    topic!(A2, News, "A young woman swims across the Rhine for charity"),
    topic!(A2, News, "A baker in Cologne wins a prize for the best Stollen"),
    topic!(A2, News, "Vienna metro gets free wifi"),
    topic!(A2, Culture, "The tradition of Karneval in Cologne"),
    topic!(A2, Culture, "How Germans celebrate Easter"),
    topic!(A2, Culture, "Bread culture in Germany: over 3000 varieties"),
    topic!(A2, Culture, "Why Germans love allotment gardens (Kleingärten)"),
    topic!(A2, Story, "A lost tourist finds help in a small village"),
    topic!(A2, Blog, "My first week at a new job"),
    topic!(A2, Journal, "Diary: a weekend trip to the mountains"),
    topic!(A2, Science, "Why bees are important for our food"),
    // B1
    topic!(B1, News, "Germany plans to phase out coal by 2038"),
    topic!(B1, News, "More German companies offer a four-day work week"),
    topic!(B1, News, "Vienna named the most liveable city for the fifth year"),
    topic!(B1, News, "German supermarkets reduce food waste with new app"),
    topic!(B1, News, "Germany invests in hydrogen-powered trains"),
    topic!(B1, News, "A German city bans cars from its old town centre"),
    topic!(B1, Story, "A woman discovers her grandfather was a famous artist"),
    topic!(B1, Story, "A man quits his well-paid job to become a beekeeper"),
    topic!(B1, Story, "A teenager finds old love letters in the attic"),
    topic!(B1, Story, "Two strangers are stranded at an airport overnight"),
    topic!(B1, Story, "A librarian finds a hidden note inside a very old book"),
    topic!(B1, Blog, "A student starts a podcast in German to practise speaking"),
    topic!(B1, Journal, "Diary: the day I moved into my first flat"),
    topic!(B1, Science, "How urban gardens change city life"),
    topic!(B1, Culture, "The story behind Oktoberfest"),
    topic!(B1, Poem, "A poem about a train journey through winter"),
    // B2
    topic!(B2, News, "The shortage of skilled workers in German industry"),
    topic!(B2, News, "Rising house prices force young people out of cities"),
    topic!(B2, News, "How Germany is responding to its ageing population"),
    topic!(B2, Story, "A woman returns to her hometown after twenty years"),
    topic!(B2, Story, "A journalist writes about a town that time forgot"),
    topic!(B2, Blog, "Why I left my startup and what I learned"),
    topic!(B2, Blog, "On grief and what it teaches us about love"),
    topic!(B2, Science, "Neuroplasticity: how experience reshapes the brain"),
    topic!(B2, Culture, "The Bauhaus movement and modern design"),
    topic!(B2, Poem, "A poem about the passage of time and memory"),
    topic!(B2, Journal, "Diary of a volunteer at a refugee language café"),
    // C1
    topic!(C1, Science, "The philosophical implications of artificial consciousness"),
    topic!(C1, Science, "The Fermi paradox and what it implies about intelligence"),
    topic!(C1, Science, "The evolutionary origins of altruism"),
    topic!(C1, Culture, "Hannah Arendt and the banality of evil"),
    topic!(C1, Culture, "The Frankfurt School and the critique of mass culture"),
    topic!(C1, Culture, "The concept of Bildung in German intellectual history"),
    topic!(C1, News, "Geopolitical implications of Germany's energy dependency"),
    topic!(C1, Blog, "On translation as a form of interpretation"),
    topic!(C1, Poem, "A poem about industrial landscapes"),
    topic!(C1, Story, "An archivist uncovers a forgery that rewrites local history"),
    // C2
    topic!(C2, Story, "A philosopher on his deathbed revises his lifelong thesis"),
    topic!(C2, Story, "A linguist studies a dying dialect and becomes its last speaker"),
    topic!(C2, Poem, "A poem meditating on the act of translation itself"),
    topic!(C2, Poem, "A poem in the tradition of Celan on language after catastrophe"),
    topic!(C2, Culture, "Rilke's Duino Elegies and the problem of modern existence"),
    topic!(C2, Culture, "Adorno's aesthetic theory and its relevance today"),
    topic!(C2, Science, "The epistemological limits of scientific knowledge"),
    topic!(C2, Science, "The measurement problem in quantum mechanics and its interpretations"),
    topic!(C2, Journal, "Notebook of a translator wrestling with an untranslatable poem"),
    topic!(C2, Blog, "What Wittgenstein's remark about language actually means"),
];
