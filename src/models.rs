/// Which kind of brigade event a record (or the form) describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecordKind {
    #[default]
    Dispatch, // salida
    Return, // retorno
}

impl RecordKind {
    pub fn label(self) -> &'static str {
        match self {
            RecordKind::Dispatch => "Salida",
            RecordKind::Return => "Retorno",
        }
    }
}

/// Fields that only exist for one kind of record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordDetail {
    Dispatch { volunteers: Vec<String> },
    /// Notes are always present on a return, even when empty.
    Return { notes: String },
}

/// A submitted brigade event. Never modified after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub date: String,
    pub time: String,
    pub place: String,
    pub responsible_parties: Vec<String>,
    pub detail: RecordDetail,
}

impl Record {
    pub fn kind(&self) -> RecordKind {
        match self.detail {
            RecordDetail::Dispatch { .. } => RecordKind::Dispatch,
            RecordDetail::Return { .. } => RecordKind::Return,
        }
    }

    pub fn volunteers(&self) -> Option<&[String]> {
        match &self.detail {
            RecordDetail::Dispatch { volunteers } => Some(volunteers),
            RecordDetail::Return { .. } => None,
        }
    }

    pub fn notes(&self) -> Option<&str> {
        match &self.detail {
            RecordDetail::Dispatch { .. } => None,
            RecordDetail::Return { notes } => Some(notes),
        }
    }
}

/// Splits multi-line input into one entry per line.
///
/// Lines are kept literally: no trimming and no dropping of blank lines, so an
/// empty input yields a single empty entry.
pub fn split_entries(text: &str) -> Vec<String> {
    text.split('\n').map(str::to_string).collect()
}

/// Append-only list of the records submitted during this session
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a record at the end and returns the new size
    pub fn append(&mut self, record: Record) -> usize {
        self.records.push(record);
        self.records.len()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
