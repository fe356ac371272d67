// ============================================================
// Manifest Domain Type
// ============================================================
// One line of train.txt / val.txt:
//
//   LJ001-0001|LJSpeech|{P R IH1 N T IH0 NG sp IH0 N}
//     id        speaker    raw text (usually ARPAbet)
//
// The id and speaker together name every per-example array file
// on disk, so they are kept verbatim.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    /// Utterance id ("basename")
    pub id: String,

    /// Speaker name as written by the preprocessor
    pub speaker: String,

    /// Transcript before cleaning / encoding
    pub text: String,
}

impl ManifestEntry {
    pub fn new(
        id:      impl Into<String>,
        speaker: impl Into<String>,
        text:    impl Into<String>,
    ) -> Self {
        Self {
            id:      id.into(),
            speaker: speaker.into(),
            text:    text.into(),
        }
    }
}

/// All entries of one manifest, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    entries: Vec<ManifestEntry>,
}

impl Manifest {
    pub fn new(entries: Vec<ManifestEntry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ManifestEntry> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[ManifestEntry] {
        &self.entries
    }

    /// The three parallel columns (ids, speakers, texts).
    pub fn columns(&self) -> (Vec<&str>, Vec<&str>, Vec<&str>) {
        let ids      = self.entries.iter().map(|e| e.id.as_str()).collect();
        let speakers = self.entries.iter().map(|e| e.speaker.as_str()).collect();
        let texts    = self.entries.iter().map(|e| e.text.as_str()).collect();
        (ids, speakers, texts)
    }
}
