//! Cue list document model
//!
//! The structs mirror the XML schema one to one. Anything missing from the
//! document stays at its zero value. Nothing here is mutated once parsing is done.

/// Root `<Production>` element
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Production {
    pub cue_list: CueList,
}

impl Production {
    /// Cues in document order
    pub fn cues(&self) -> &[Cue] {
        &self.cue_list.cues
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CueList {
    pub cues: Vec<Cue>,
}

/// One cue in the running order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cue {
    pub uid: String,
    /// `<Type>` category code
    pub kind: i64,
    pub enabled: i64,
    /// Cue number as shown to the operator, e.g. `"12.5"`
    pub q: String,
    pub description: String,
    pub msgs: Vec<Msg>,
}

/// A MIDI-style message attached to a cue
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Msg {
    pub name: String,
    pub command: i64,
    pub channel: i64,
    pub data1: i64,
    pub data2: i64,
}

impl Msg {
    /// Data2 == 1 marks the channel as switched on
    pub fn is_on(&self) -> bool {
        self.data2 == 1
    }
}
