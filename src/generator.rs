//! Generated-module rendering.
//!
//! Turns an ordered sequence of [`EncodedAsset`]s into the complete text of
//! an importable Python/Tkinter module:
//!
//! ```text
//! IMAGES = {
//! "dawn.png": """
//! iVBORw0KGgo...
//! """,
//! }
//! ```
//!
//! plus a memoized `load_image(name)` accessor and a minimal chooser UI that
//! runs only when the module is executed directly (`__main__` guard), never
//! on import.
//!
//! ## Embedding safety
//!
//! Payloads sit inside triple-quoted strings and logical names inside plain
//! double quotes. Rather than escape, the generator *rejects* anything that
//! could break the emitted syntax: names containing quotes, backslashes,
//! control characters, or path separators, and payloads containing `"""` or
//! `\`. The shipped encoders emit pure base64, which can never trip the
//! payload check — it exists for foreign callers.
//!
//! Duplicate logical names are rejected too. Python's dict literal would
//! silently keep the last entry, so a collision would drop an image without
//! a trace; failing loudly here is the only honest option.

use crate::types::EncodedAsset;
use std::collections::HashSet;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("logical name {0:?} cannot be embedded as a mapping key")]
    InvalidName(String),
    #[error("duplicate logical name {0:?}")]
    DuplicateName(String),
    #[error("payload for {0:?} contains characters unsafe to embed")]
    UnsafePayload(String),
}

/// Everything before the mapping entries.
const MODULE_PREAMBLE: &str = r#"#!/usr/bin/env python3

import tkinter as tk
from tkinter import ttk
from functools import lru_cache

IMAGES = {
"#;

/// Everything after the mapping entries: the cached accessor and the
/// self-test viewer. `lru_cache(None)` is the unbounded per-name memo —
/// repeated `load_image` calls return the same `PhotoImage` instance.
const MODULE_POSTAMBLE: &str = r#"}

@lru_cache(None)
def load_image(name):
    return tk.PhotoImage(data=IMAGES[name])

def main():
    def disp_image(*args):
        disp.config(image=load_image(var.get()))
    root = tk.Tk()
    tk.Label(text="Image tester:").grid()
    var = tk.StringVar()
    ttk.OptionMenu(root, var, "choose an image:", *IMAGES, command=disp_image).grid(column=1, row=0)
    disp = tk.Label(root)
    disp.grid(columnspan=2)
    root.mainloop()

if __name__ == '__main__':
    main()
"#;

/// Render the complete module text for the given entries, in input order.
///
/// Pure function of its input: no I/O, no side effects. Payload content is
/// otherwise trusted (the encoder guarantees reversibility); only embedding
/// safety is checked, per the module docs.
pub fn generate(entries: &[EncodedAsset]) -> Result<String, GenerateError> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut out = String::from(MODULE_PREAMBLE);

    for entry in entries {
        if !is_embeddable_name(&entry.logical_name) {
            return Err(GenerateError::InvalidName(entry.logical_name.clone()));
        }
        if !seen.insert(&entry.logical_name) {
            return Err(GenerateError::DuplicateName(entry.logical_name.clone()));
        }
        if entry.payload.contains("\"\"\"") || entry.payload.contains('\\') {
            return Err(GenerateError::UnsafePayload(entry.logical_name.clone()));
        }
        out.push_str(&format!(
            "\"{}\": \"\"\"\n{}\"\"\",\n",
            entry.logical_name, entry.payload
        ));
    }

    out.push_str(MODULE_POSTAMBLE);
    Ok(out)
}

/// A name is embeddable when it can sit between double quotes untouched and
/// still be a sensible lookup key: non-empty, no quotes or backslashes, no
/// control characters, no path separators.
fn is_embeddable_name(name: &str) -> bool {
    !name.is_empty()
        && !name
            .chars()
            .any(|c| c == '"' || c == '\\' || c == '/' || c.is_control())
}
