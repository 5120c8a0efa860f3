//! Transaction output references.

use core::fmt;

use bitcoin::{ScriptBuf, Txid};
use serde::{Deserialize, Serialize};

/// Reference to a transaction output, identified by txid and output index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OutputRef {
    txid: Txid,
    vout: u32,
}

impl OutputRef {
    pub fn new(txid: Txid, vout: u32) -> Self {
        Self { txid, vout }
    }

    pub fn txid(&self) -> &Txid {
        &self.txid
    }

    pub fn vout(&self) -> u32 {
        self.vout
    }
}

impl fmt::Display for OutputRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.txid, self.vout)
    }
}

/// An output of a transaction under admission consideration.
///
/// Carries the output's index within its transaction together with the
/// locking script. The script is opaque at this level; token structure is
/// imposed by the decoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxOutput {
    index: u32,
    script: ScriptBuf,
}

impl TxOutput {
    pub fn new(index: u32, script: ScriptBuf) -> Self {
        Self { index, script }
    }

    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn script(&self) -> &ScriptBuf {
        &self.script
    }
}
