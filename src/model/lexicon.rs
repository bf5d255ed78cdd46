// English lexicon — closed-class words, open-class seed lists, irregular
// inflections and entity gazetteers.
//
// The lists are deliberately small: they cover the words a suffix rule would
// get wrong, and leave everything else to the tagger's heuristics. Stop words
// come from the `stop-words` crate rather than being maintained here.

use std::collections::{HashMap, HashSet};

use stop_words::{get, LANGUAGE};

use super::document::{EntityLabel, PosTag};

const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "some", "any", "no", "every", "each",
    "either", "neither", "another", "such", "what", "which", "whatever", "all", "both", "half",
    "few", "several", "many", "much", "more", "most", "less", "least",
];

const PRONOUNS: &[&str] = &[
    "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them", "my", "your",
    "his", "its", "our", "their", "mine", "yours", "hers", "ours", "theirs", "myself", "yourself",
    "himself", "herself", "itself", "ourselves", "yourselves", "themselves", "who", "whom",
    "whose", "someone", "somebody", "something", "anyone", "anybody", "anything", "everyone",
    "everybody", "everything", "nobody", "nothing", "none", "one", "oneself",
];

/// Possessive determiners. Tagged PRON but open a noun chunk.
const POSSESSIVES: &[&str] = &["my", "your", "his", "her", "its", "our", "their"];

/// Pronouns that form a noun chunk on their own.
const PERSONAL_PRONOUNS: &[&str] = &[
    "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them",
];

const AUXILIARIES: &[&str] = &[
    "be", "is", "are", "was", "were", "am", "been", "being", "will", "would", "shall", "should",
    "can", "could", "may", "might", "must", "ca", "wo", "sha",
];

/// Auxiliaries that are main verbs when not followed by another verb.
const LIGHT_VERBS: &[&str] = &["have", "has", "had", "having", "do", "does", "did", "doing"];

const ADPOSITIONS: &[&str] = &[
    "about", "above", "across", "after", "against", "along", "amid", "among", "around", "as",
    "at", "before", "behind", "below", "beneath", "beside", "besides", "between", "beyond", "by",
    "despite", "down", "during", "except", "for", "from", "in", "inside", "into", "near",
    "of", "off", "on", "onto", "out", "outside", "over", "past", "per", "since", "through",
    "throughout", "till", "to", "toward", "towards", "under", "underneath", "until", "unto",
    "up", "upon", "via", "with", "within", "without",
];

const COORDINATORS: &[&str] = &["and", "or", "but", "nor", "yet", "&", "plus"];

const SUBORDINATORS: &[&str] = &[
    "although", "because", "if", "unless", "whereas", "whether", "while", "though", "once",
    "than", "whenever", "wherever",
];

const PARTICLES: &[&str] = &["not", "n't", "n’t"];

const ADVERBS: &[&str] = &[
    "very", "also", "just", "only", "even", "still", "already", "always", "never", "often",
    "sometimes", "usually", "soon", "now", "then", "here", "there", "where", "when", "why",
    "how", "again", "almost", "quite", "rather", "too", "so", "really", "perhaps", "maybe",
    "however", "therefore", "thus", "instead", "together", "away", "back", "ago", "yesterday",
    "today", "tomorrow", "tonight", "else", "ever", "yet", "well", "later", "early", "further",
    "indeed", "anyway", "otherwise", "meanwhile", "nevertheless", "once", "twice", "abroad",
    "ahead", "apart", "nearly", "hardly", "barely", "mostly", "fast",
];

const INTERJECTIONS: &[&str] = &[
    "oh", "hey", "hi", "hello", "wow", "ouch", "oops", "yes", "yeah", "no", "okay", "ok",
    "please", "thanks", "alas",
];

const NUMBER_WORDS: &[&str] = &[
    "zero", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "eleven",
    "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen", "nineteen",
    "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety", "hundred",
    "thousand", "million", "billion", "trillion", "dozen",
];

const ORDINAL_WORDS: &[&str] = &[
    "first", "second", "third", "fourth", "fifth", "sixth", "seventh", "eighth", "ninth",
    "tenth", "eleventh", "twelfth", "twentieth", "hundredth",
];

/// Base forms of common verbs. Used to recognise inflected forms and to
/// repair stems during lemmatization.
const VERBS: &[&str] = &[
    "accept", "achieve", "acquire", "act", "add", "admit", "affect", "agree", "allow", "announce",
    "answer", "appear", "apply", "argue", "arrive", "ask", "attack", "attend", "avoid", "bake",
    "be", "bear", "beat", "become", "begin", "believe", "belong", "bite", "blow", "break",
    "bring", "build", "burn", "buy", "call", "care", "carry", "catch", "cause", "change",
    "charge", "chase", "check", "choose", "claim", "clean", "climb", "close", "collect", "come",
    "compare", "complete", "consider", "contain", "continue", "cook", "cope", "cost", "count",
    "cover", "create", "cry", "cut", "dance", "deal", "decide", "define", "deliver", "describe",
    "design", "destroy", "develop", "die", "dig", "discover", "discuss", "do", "draw", "dream",
    "dress", "drink", "drive", "drop", "eat", "enjoy", "enter", "escape", "expand", "expect",
    "explain", "face", "fail", "fall", "feed", "feel", "fight", "fill", "find", "finish", "fit",
    "fix", "fly", "focus", "follow", "forget", "forgive", "form", "freeze", "get",
    "give", "go", "grow", "guess", "hand", "hang", "happen", "hate", "have", "hear", "help",
    "hide", "hire", "hit", "hold", "hope", "hurt", "identify", "imagine", "improve", "include",
    "increase", "introduce", "invest", "invite", "join", "joke", "jump", "keep", "kick", "kill",
    "know", "land", "last", "laugh", "launch", "lay", "lead", "lean", "learn", "leave", "lend",
    "let", "lie", "like", "listen", "live", "look", "lose", "love", "make", "manage", "mean",
    "measure", "meet", "merge", "mind", "miss", "move", "name", "need", "note", "notice",
    "obtain", "occur", "offer", "open", "order", "own", "paint", "pass", "pay", "perform",
    "pick", "place", "plan", "play", "point", "prefer", "prepare", "present", "prevent",
    "produce", "promise", "protect", "prove", "provide", "publish", "pull", "push", "put",
    "quit", "quote", "raise", "reach", "read", "receive", "recognize", "reduce", "refuse",
    "release", "remain", "remember", "remove", "rent", "repeat", "replace", "reply", "report",
    "require", "rest", "return", "ride", "ring", "rise", "run", "save", "say", "see", "seek",
    "seem", "sell", "send", "serve", "set", "settle", "shake", "share", "shine", "shoot", "shop",
    "show", "shut", "sing", "sink", "sit", "sleep", "slide", "smile", "smoke", "speak", "spend",
    "stand", "start", "stay", "steal", "stick", "stop", "study", "succeed", "suggest", "support",
    "suppose", "surprise", "swim", "swing", "take", "talk", "teach", "tear", "tell", "tend",
    "test", "thank", "think", "throw", "tie", "touch", "train", "travel", "treat", "try", "turn",
    "type", "understand", "unite", "use", "visit", "vote", "wait", "wake", "walk", "want",
    "warn", "wash", "watch", "wear", "win", "wish", "wonder", "work", "worry", "write",
];

const ADJECTIVES: &[&str] = &[
    "able", "bad", "beautiful", "best", "better", "big", "black", "blue", "bright", "broad",
    "busy", "cheap", "clean", "clear", "close", "cold", "common", "cool", "dark", "dead", "deep",
    "different", "difficult", "dry", "early", "easy", "elderly", "empty", "entire", "equal",
    "exciting", "fair", "false", "famous", "fat", "fine", "foreign", "free", "fresh", "friendly",
    "full", "funny", "good", "great", "green", "happy", "hard", "heavy", "high", "hot", "huge",
    "important", "interesting", "key", "kind", "large", "late", "latest", "likely", "little",
    "local", "long", "lovely", "low", "main", "major", "modern", "new", "nice", "old", "open",
    "other", "own", "poor", "popular", "possible", "pretty", "private", "public", "quick",
    "quiet", "ready", "real", "recent", "red", "rich", "right", "sad", "safe", "same", "short",
    "similar", "simple", "slow", "small", "smart", "soft", "special", "strong", "sure", "tall",
    "thin", "tiny", "true", "ugly", "warm", "weak", "white", "whole", "wide", "wild", "wrong",
    "yellow", "young", "amazing", "boring", "surprising", "leading", "upcoming",
];

/// Nouns that a suffix rule would mis-tag.
const NOUNS: &[&str] = &[
    "family", "supply", "reply", "assembly", "ally", "rally", "belly", "jelly", "bully",
    "morning", "evening", "ceiling", "wedding", "pudding", "string", "spring", "offspring",
    "sibling", "king", "thing", "ring", "wing", "bed", "speed", "seed", "shed", "need", "startup",
    "news", "data", "people", "series", "species", "police", "mat", "cat", "dog",
];

const IRREGULAR_VERBS: &[(&str, &str)] = &[
    ("is", "be"), ("are", "be"), ("was", "be"), ("were", "be"), ("am", "be"), ("been", "be"),
    ("being", "be"), ("'s", "be"), ("’s", "be"), ("'re", "be"), ("’re", "be"), ("'m", "be"),
    ("’m", "be"), ("'ve", "have"), ("’ve", "have"), ("'ll", "will"), ("’ll", "will"),
    ("'d", "would"), ("’d", "would"), ("ca", "can"), ("wo", "will"), ("sha", "shall"),
    ("has", "have"), ("had", "have"), ("having", "have"), ("does", "do"), ("did", "do"),
    ("done", "do"), ("doing", "do"), ("ate", "eat"), ("eaten", "eat"), ("began", "begin"),
    ("begun", "begin"), ("bit", "bite"), ("bitten", "bite"), ("blew", "blow"), ("blown", "blow"),
    ("broke", "break"), ("broken", "break"), ("brought", "bring"), ("built", "build"),
    ("bought", "buy"), ("caught", "catch"), ("chose", "choose"), ("chosen", "choose"),
    ("came", "come"), ("dealt", "deal"), ("dug", "dig"), ("drew", "draw"), ("drawn", "draw"),
    ("drank", "drink"), ("drunk", "drink"), ("drove", "drive"), ("driven", "drive"),
    ("fell", "fall"), ("fallen", "fall"), ("fed", "feed"), ("felt", "feel"), ("fought", "fight"),
    ("found", "find"), ("flew", "fly"), ("flown", "fly"), ("forgot", "forget"),
    ("forgotten", "forget"), ("froze", "freeze"), ("frozen", "freeze"), ("got", "get"),
    ("gotten", "get"), ("gave", "give"), ("given", "give"), ("went", "go"), ("gone", "go"),
    ("goes", "go"), ("grew", "grow"), ("grown", "grow"), ("hung", "hang"), ("heard", "hear"),
    ("hid", "hide"), ("hidden", "hide"), ("held", "hold"), ("kept", "keep"), ("knew", "know"),
    ("known", "know"), ("laid", "lay"), ("led", "lead"), ("left", "leave"), ("lent", "lend"),
    ("lain", "lie"), ("lying", "lie"), ("lost", "lose"), ("made", "make"),
    ("meant", "mean"), ("met", "meet"), ("paid", "pay"), ("ran", "run"), ("rang", "ring"),
    ("rung", "ring"), ("rode", "ride"), ("ridden", "ride"), ("rose", "rise"), ("risen", "rise"),
    ("said", "say"), ("saw", "see"), ("seen", "see"), ("sought", "seek"), ("sold", "sell"),
    ("sent", "send"), ("shook", "shake"), ("shaken", "shake"), ("shone", "shine"),
    ("shot", "shoot"), ("sang", "sing"), ("sung", "sing"), ("sank", "sink"), ("sunk", "sink"),
    ("sat", "sit"), ("slept", "sleep"), ("slid", "slide"), ("spoke", "speak"),
    ("spoken", "speak"), ("spent", "spend"), ("stood", "stand"), ("stole", "steal"),
    ("stolen", "steal"), ("stuck", "stick"), ("swam", "swim"), ("swum", "swim"),
    ("swung", "swing"), ("took", "take"), ("taken", "take"), ("taught", "teach"),
    ("tore", "tear"), ("torn", "tear"), ("told", "tell"), ("thought", "think"),
    ("threw", "throw"), ("thrown", "throw"), ("tying", "tie"), ("dying", "die"),
    ("understood", "understand"), ("woke", "wake"), ("woken", "wake"), ("wore", "wear"),
    ("worn", "wear"), ("won", "win"), ("wrote", "write"), ("written", "write"),
    ("became", "become"), ("forgave", "forgive"), ("forgiven", "forgive"),
];

const IRREGULAR_NOUNS: &[(&str, &str)] = &[
    ("children", "child"), ("men", "man"), ("women", "woman"), ("mice", "mouse"),
    ("feet", "foot"), ("teeth", "tooth"), ("geese", "goose"), ("wolves", "wolf"),
    ("knives", "knife"), ("lives", "life"), ("leaves", "leaf"), ("wives", "wife"),
    ("halves", "half"), ("shelves", "shelf"), ("thieves", "thief"), ("analyses", "analysis"),
    ("crises", "crisis"), ("criteria", "criterion"), ("phenomena", "phenomenon"),
    ("news", "news"), ("series", "series"), ("species", "species"), ("people", "people"),
    ("data", "data"), ("gas", "gas"), ("bus", "bus"), ("lens", "lens"),
];

const IRREGULAR_ADJECTIVES: &[(&str, &str)] = &[
    ("better", "good"), ("best", "good"), ("worse", "bad"), ("worst", "bad"),
    ("further", "far"), ("farther", "far"), ("furthest", "far"), ("farthest", "far"),
];

const ORGANIZATIONS: &[&str] = &[
    "apple", "google", "alphabet", "microsoft", "amazon", "meta", "facebook", "twitter",
    "netflix", "tesla", "ibm", "intel", "nvidia", "samsung", "sony", "toyota", "ford",
    "boeing", "airbus", "walmart", "uber", "spotify", "openai", "anthropic", "oracle", "adobe",
    "nasa", "fbi", "cia", "nato", "un", "united nations", "european union", "eu", "who",
    "world bank", "congress", "senate", "parliament", "reuters", "bbc", "cnn", "harvard",
    "stanford", "mit", "oxford university", "goldman sachs", "morgan stanley", "jpmorgan",
    "linkedin", "instagram", "youtube", "github", "mozilla", "red cross",
];

const GEOPOLITICAL: &[&str] = &[
    "uk", "u.k.", "us", "u.s.", "usa", "u.s.a.", "united states", "united kingdom", "britain",
    "great britain", "england", "scotland", "wales", "ireland", "france", "germany", "italy",
    "spain", "portugal", "netherlands", "belgium", "switzerland", "austria", "sweden", "norway",
    "denmark", "finland", "poland", "russia", "ukraine", "china", "japan", "india", "korea",
    "south korea", "north korea", "canada", "mexico", "brazil", "argentina", "chile",
    "australia", "new zealand", "egypt", "nigeria", "kenya", "south africa", "israel", "iran",
    "iraq", "turkey", "greece", "london", "paris", "berlin", "madrid", "rome", "tokyo",
    "beijing", "shanghai", "moscow", "new york", "new york city", "los angeles", "chicago",
    "boston", "seattle", "san francisco", "washington", "texas", "california", "florida",
    "toronto", "sydney", "dublin", "amsterdam", "zurich", "zürich", "geneva", "mumbai", "delhi",
    "singapore", "hong kong",
];

const LOCATIONS: &[&str] = &[
    "europe", "asia", "africa", "antarctica", "north america", "south america",
    "latin america", "middle east", "silicon valley", "pacific", "atlantic", "arctic",
    "mediterranean", "alps", "himalayas", "sahara", "amazon river", "nile", "mars", "earth",
];

const NATIONALITIES: &[&str] = &[
    "american", "americans", "british", "english", "french", "german", "germans", "italian",
    "spanish", "chinese", "japanese", "indian", "russian", "canadian", "mexican", "brazilian",
    "australian", "european", "europeans", "african", "asian", "irish", "scottish", "dutch",
    "swiss", "swedish", "korean", "israeli", "christian", "christians", "muslim", "muslims",
    "jewish", "buddhist", "hindu", "catholic", "democrat", "democrats", "republican",
    "republicans",
];

const LANGUAGES: &[&str] = &["latin", "esperanto", "mandarin", "cantonese", "hindi", "arabic"];

const PRODUCTS: &[&str] = &[
    "iphone", "ipad", "android", "windows", "linux", "playstation", "xbox", "kindle",
    "chatgpt", "macbook",
];

const EVENTS: &[&str] = &[
    "world war ii", "world war i", "olympics", "world cup", "super bowl", "brexit",
];

const FIRST_NAMES: &[&str] = &[
    "james", "john", "robert", "michael", "william", "david", "richard", "joseph", "thomas",
    "charles", "mary", "patricia", "jennifer", "linda", "elizabeth", "barbara", "susan",
    "jessica", "sarah", "karen", "emma", "olivia", "sophia", "alice", "bob", "tim", "steve",
    "bill", "elon", "mark", "jeff", "sundar", "satya", "barack", "donald", "joe", "angela",
    "emmanuel", "brian", "ian", "anna", "maria", "peter", "paul", "george", "jack", "harry",
    "kate", "lucy", "sam", "alex", "chris", "daniel", "laura", "rachel", "tom", "ada", "alan",
];

const HONORIFICS: &[&str] = &[
    "mr", "mr.", "mrs", "mrs.", "ms", "ms.", "dr", "dr.", "prof", "prof.", "sir", "dame",
    "lord", "lady", "president", "senator", "governor", "mayor", "judge", "king", "queen",
    "prince", "princess", "ceo", "professor",
];

const ORG_SUFFIXES: &[&str] = &[
    "inc", "inc.", "corp", "corp.", "corporation", "ltd", "ltd.", "llc", "plc", "company",
    "co.", "group", "university", "college", "bank", "institute", "association", "foundation",
    "agency", "committee", "council", "party", "club", "airlines", "motors", "technologies",
    "systems", "labs", "news", "times", "post", "ministry", "department", "school", "academy",
    "society", "union", "fund", "partners", "holdings", "industries", "records", "studios",
];

const PLACE_SUFFIXES: &[(&str, EntityLabel)] = &[
    ("city", EntityLabel::Gpe),
    ("county", EntityLabel::Gpe),
    ("province", EntityLabel::Gpe),
    ("republic", EntityLabel::Gpe),
    ("kingdom", EntityLabel::Gpe),
    ("river", EntityLabel::Loc),
    ("lake", EntityLabel::Loc),
    ("mountain", EntityLabel::Loc),
    ("mountains", EntityLabel::Loc),
    ("ocean", EntityLabel::Loc),
    ("sea", EntityLabel::Loc),
    ("valley", EntityLabel::Loc),
    ("island", EntityLabel::Loc),
    ("islands", EntityLabel::Loc),
    ("bay", EntityLabel::Loc),
    ("desert", EntityLabel::Loc),
    ("forest", EntityLabel::Loc),
    ("airport", EntityLabel::Fac),
    ("bridge", EntityLabel::Fac),
    ("tower", EntityLabel::Fac),
    ("stadium", EntityLabel::Fac),
    ("street", EntityLabel::Fac),
    ("avenue", EntityLabel::Fac),
    ("road", EntityLabel::Fac),
    ("station", EntityLabel::Fac),
    ("war", EntityLabel::Event),
    ("olympics", EntityLabel::Event),
    ("cup", EntityLabel::Event),
    ("festival", EntityLabel::Event),
    ("act", EntityLabel::Law),
    ("amendment", EntityLabel::Law),
];

const MONTHS: &[&str] = &[
    "january", "february", "march", "april", "may", "june", "july", "august", "september",
    "october", "november", "december", "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep",
    "sept", "oct", "nov", "dec",
];

const WEEKDAYS: &[&str] = &[
    "monday", "tuesday", "wednesday", "thursday", "friday", "saturday", "sunday",
];

const RELATIVE_DAYS: &[&str] = &["today", "yesterday", "tomorrow", "tonight"];

const CURRENCY_WORDS: &[&str] = &[
    "dollar", "dollars", "euro", "euros", "pound", "pounds", "cent", "cents", "yen", "yuan",
];

const MAGNITUDES: &[&str] = &["hundred", "thousand", "million", "billion", "trillion"];

/// The loaded lexicon. Built once per model and shared read-only.
pub struct Lexicon {
    stop_words: HashSet<String>,
    closed_class: HashMap<&'static str, PosTag>,
    light_verbs: HashSet<&'static str>,
    possessives: HashSet<&'static str>,
    personal_pronouns: HashSet<&'static str>,
    number_words: HashSet<&'static str>,
    ordinal_words: HashSet<&'static str>,
    verbs: HashSet<&'static str>,
    adjectives: HashSet<&'static str>,
    nouns: HashSet<&'static str>,
    irregular_verbs: HashMap<&'static str, &'static str>,
    irregular_nouns: HashMap<&'static str, &'static str>,
    irregular_adjectives: HashMap<&'static str, &'static str>,
    gazetteer: HashMap<&'static str, EntityLabel>,
    first_names: HashSet<&'static str>,
    honorifics: HashSet<&'static str>,
    org_suffixes: HashSet<&'static str>,
    place_suffixes: HashMap<&'static str, EntityLabel>,
    months: HashSet<&'static str>,
    weekdays: HashSet<&'static str>,
    relative_days: HashSet<&'static str>,
    currency_words: HashSet<&'static str>,
    magnitudes: HashSet<&'static str>,
}

impl Lexicon {
    /// Build the English lexicon.
    pub fn english() -> Self {
        let stop_words: HashSet<String> = get(LANGUAGE::English).into_iter().collect();

        // Later entries win, so the more specific classes go last.
        let mut closed_class = HashMap::new();
        for (words, tag) in [
            (DETERMINERS, PosTag::Det),
            (PRONOUNS, PosTag::Pron),
            (ADPOSITIONS, PosTag::Adp),
            (COORDINATORS, PosTag::Cconj),
            (SUBORDINATORS, PosTag::Sconj),
            (ADVERBS, PosTag::Adv),
            (INTERJECTIONS, PosTag::Intj),
            (NUMBER_WORDS, PosTag::Num),
            (AUXILIARIES, PosTag::Aux),
            (LIGHT_VERBS, PosTag::Aux),
            (PARTICLES, PosTag::Part),
        ] {
            for word in words {
                closed_class.insert(*word, tag);
            }
        }
        closed_class.insert("one", PosTag::Num);
        closed_class.insert("no", PosTag::Det);

        let mut gazetteer = HashMap::new();
        for (names, label) in [
            (NATIONALITIES, EntityLabel::Norp),
            (LANGUAGES, EntityLabel::Language),
            (PRODUCTS, EntityLabel::Product),
            (EVENTS, EntityLabel::Event),
            (LOCATIONS, EntityLabel::Loc),
            (ORGANIZATIONS, EntityLabel::Org),
            (GEOPOLITICAL, EntityLabel::Gpe),
        ] {
            for name in names {
                gazetteer.insert(*name, label);
            }
        }

        Self {
            stop_words,
            closed_class,
            light_verbs: LIGHT_VERBS.iter().copied().collect(),
            possessives: POSSESSIVES.iter().copied().collect(),
            personal_pronouns: PERSONAL_PRONOUNS.iter().copied().collect(),
            number_words: NUMBER_WORDS.iter().copied().collect(),
            ordinal_words: ORDINAL_WORDS.iter().copied().collect(),
            verbs: VERBS.iter().copied().collect(),
            adjectives: ADJECTIVES.iter().copied().collect(),
            nouns: NOUNS.iter().copied().collect(),
            irregular_verbs: IRREGULAR_VERBS.iter().copied().collect(),
            irregular_nouns: IRREGULAR_NOUNS.iter().copied().collect(),
            irregular_adjectives: IRREGULAR_ADJECTIVES.iter().copied().collect(),
            gazetteer,
            first_names: FIRST_NAMES.iter().copied().collect(),
            honorifics: HONORIFICS.iter().copied().collect(),
            org_suffixes: ORG_SUFFIXES.iter().copied().collect(),
            place_suffixes: PLACE_SUFFIXES.iter().copied().collect(),
            months: MONTHS.iter().copied().collect(),
            weekdays: WEEKDAYS.iter().copied().collect(),
            relative_days: RELATIVE_DAYS.iter().copied().collect(),
            currency_words: CURRENCY_WORDS.iter().copied().collect(),
            magnitudes: MAGNITUDES.iter().copied().collect(),
        }
    }

    // All lookups take lowercase input.

    pub fn is_stop(&self, lower: &str) -> bool {
        self.stop_words.contains(lower)
    }

    pub fn closed_class(&self, lower: &str) -> Option<PosTag> {
        self.closed_class.get(lower).copied()
    }

    pub fn is_light_verb(&self, lower: &str) -> bool {
        self.light_verbs.contains(lower)
    }

    pub fn is_possessive(&self, lower: &str) -> bool {
        self.possessives.contains(lower)
    }

    pub fn is_personal_pronoun(&self, lower: &str) -> bool {
        self.personal_pronouns.contains(lower)
    }

    pub fn is_number_word(&self, lower: &str) -> bool {
        self.number_words.contains(lower) || lower == "one"
    }

    pub fn is_ordinal_word(&self, lower: &str) -> bool {
        self.ordinal_words.contains(lower)
    }

    pub fn is_verb(&self, lower: &str) -> bool {
        self.verbs.contains(lower)
    }

    pub fn is_adjective(&self, lower: &str) -> bool {
        self.adjectives.contains(lower)
    }

    pub fn is_noun(&self, lower: &str) -> bool {
        self.nouns.contains(lower)
    }

    pub fn irregular_verb(&self, lower: &str) -> Option<&'static str> {
        self.irregular_verbs.get(lower).copied()
    }

    pub fn irregular_noun(&self, lower: &str) -> Option<&'static str> {
        self.irregular_nouns.get(lower).copied()
    }

    pub fn irregular_adjective(&self, lower: &str) -> Option<&'static str> {
        self.irregular_adjectives.get(lower).copied()
    }

    /// Label for a known name, matched on the whole lowercase span text.
    pub fn gazetteer(&self, lower: &str) -> Option<EntityLabel> {
        self.gazetteer.get(lower).copied()
    }

    pub fn is_first_name(&self, lower: &str) -> bool {
        self.first_names.contains(lower)
    }

    pub fn is_honorific(&self, lower: &str) -> bool {
        self.honorifics.contains(lower)
    }

    pub fn is_org_suffix(&self, lower: &str) -> bool {
        self.org_suffixes.contains(lower)
    }

    pub fn place_suffix(&self, lower: &str) -> Option<EntityLabel> {
        self.place_suffixes.get(lower).copied()
    }

    pub fn is_month(&self, lower: &str) -> bool {
        self.months.contains(lower)
    }

    pub fn is_weekday(&self, lower: &str) -> bool {
        self.weekdays.contains(lower)
    }

    pub fn is_relative_day(&self, lower: &str) -> bool {
        self.relative_days.contains(lower)
    }

    pub fn is_currency_word(&self, lower: &str) -> bool {
        self.currency_words.contains(lower)
    }

    pub fn is_magnitude(&self, lower: &str) -> bool {
        self.magnitudes.contains(lower)
    }

    /// Whether the word is known to any open- or closed-class list.
    pub fn knows(&self, lower: &str) -> bool {
        self.closed_class.contains_key(lower)
            || self.verbs.contains(lower)
            || self.adjectives.contains(lower)
            || self.nouns.contains(lower)
            || self.irregular_verbs.contains_key(lower)
            || self.irregular_nouns.contains_key(lower)
    }
}
