pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! Defaults for the dataset location, chart limits and the word-cloud
    //! canvas, organized by functional area.

    // =============================================================================
    // DATASET CONFIGURATION
    // =============================================================================

    /// Dataset path used when neither the CLI nor the config file names one.
    pub const DEFAULT_DATASET_PATH: &str = "dataset sentimen/brics_processing.xlsx";

    /// Column holding the sentiment label.
    pub const SENTIMENT_COLUMN: &str = "sentimen";

    /// Column holding the fully preprocessed (stemmed) text.
    pub const STEMMED_TEXT_COLUMN: &str = "stemming_text";

    /// Column holding the stopword-filtered, unstemmed text.
    pub const FILTERED_TEXT_COLUMN: &str = "stopwords_text";

    /// Directory under the home directory holding the optional config file.
    pub const CONFIG_DIR: &str = ".sentiment-dashboard";

    /// File name of the optional config file.
    pub const CONFIG_FILE: &str = "config.json";

    // =============================================================================
    // CHART CONFIGURATION
    // =============================================================================

    /// Number of entries in the top-words chart.
    pub const TOP_WORDS: usize = 10;

    /// Number of entries in the top-trigrams chart.
    pub const TOP_TRIGRAMS: usize = 5;

    /// Default chart title prefix.
    pub const DEFAULT_TITLE: &str = "Sentiment BRICS";

    /// Word-cloud canvas defaults
    pub mod word_cloud {
        /// Canvas width in pixels.
        pub const WIDTH: u32 = 800;

        /// Canvas height in pixels.
        pub const HEIGHT: u32 = 400;

        /// Maximum number of words placed on the canvas.
        pub const MAX_WORDS: usize = 200;

        /// Smallest font size before layout stops.
        pub const MIN_FONT_SIZE: u32 = 4;

        /// Font size decrement when a word does not fit.
        pub const FONT_STEP: u32 = 1;

        /// Weight of relative frequency on font size (0 = rank only, 1 = linear).
        pub const RELATIVE_SCALING: f64 = 0.5;

        /// Probability of placing a word horizontally.
        pub const PREFER_HORIZONTAL: f64 = 0.9;

        /// Seed for the placement RNG.
        pub const RANDOM_STATE: u64 = 42;

        /// Side of one occupancy-grid cell in pixels.
        pub const GRID_CELL_PX: u32 = 4;

        /// Glyph width as a fraction of the font size.
        pub const GLYPH_ASPECT: f64 = 0.6;

        /// Likelihood-ratio score above which a word pair counts as one term.
        pub const COLLOCATION_THRESHOLD: f64 = 30.0;

        /// Words dropped from the word cloud unless the config replaces the list.
        pub const STOPWORDS: &[&str] = &[
            "a", "about", "above", "after", "again", "against", "all", "also", "am", "an",
            "and", "any", "are", "aren't", "as", "at", "be", "because", "been", "before",
            "being", "below", "between", "both", "but", "by", "can", "can't", "cannot", "com",
            "could", "couldn't", "did", "didn't", "do", "does", "doesn't", "doing", "don't",
            "down", "during", "each", "else", "ever", "few", "for", "from", "further", "get",
            "had", "hadn't", "has", "hasn't", "have", "haven't", "having", "he", "he'd",
            "he'll", "he's", "hence", "her", "here", "here's", "hers", "herself", "him",
            "himself", "his", "how", "how's", "however", "http", "i", "i'd", "i'll", "i'm",
            "i've", "if", "in", "into", "is", "isn't", "it", "it's", "its", "itself", "just",
            "k", "let's", "like", "me", "more", "most", "mustn't", "my", "myself", "no", "nor",
            "not", "of", "off", "on", "once", "only", "or", "other", "otherwise", "ought",
            "our", "ours", "ourselves", "out", "over", "own", "r", "same", "shall", "shan't",
            "she", "she'd", "she'll", "she's", "should", "shouldn't", "since", "so", "some",
            "such", "than", "that", "that's", "the", "their", "theirs", "them", "themselves",
            "then", "there", "there's", "therefore", "these", "they", "they'd", "they'll",
            "they're", "they've", "this", "those", "through", "to", "too", "under", "until",
            "up", "very", "was", "wasn't", "we", "we'd", "we'll", "we're", "we've", "were",
            "weren't", "what", "what's", "when", "when's", "where", "where's", "which",
            "while", "who", "who's", "whom", "why", "why's", "with", "won't", "would",
            "wouldn't", "www", "you", "you'd", "you'll", "you're", "you've", "your", "yours",
            "yourself", "yourselves",
        ];
    }

    // =============================================================================
    // UI CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Maximum number of buffered loader events.
    pub const EVENT_QUEUE_SIZE: usize = 16;

    /// Minimum time the splash screen stays visible (milliseconds).
    pub const SPLASH_DURATION_MS: u64 = 1500;

    /// Key polling interval of the UI loop (milliseconds).
    pub const UI_POLL_INTERVAL_MS: u64 = 100;

    /// Default buffer size for headless rendering.
    pub const HEADLESS_WIDTH: u16 = 100;
    pub const HEADLESS_HEIGHT: u16 = 30;
}
