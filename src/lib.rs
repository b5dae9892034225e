//! # imgintern
//!
//! Convert image files into an importable Python/Tkinter source module.
//! The images travel as inline base64 string literals inside the generated
//! `.py` file, so a frozen desktop program (PyInstaller and friends) ships
//! them automatically — no loose asset files to bundle or lose.
//!
//! # Architecture: Encode, Then Generate
//!
//! One conversion run is two pure steps and a single write:
//!
//! ```text
//! 1. Encode    image file  →  text-safe payload   (one call per file)
//! 2. Generate  payloads    →  module text         (one call per run)
//! 3. Write     module text →  images.py           (atomic rename)
//! ```
//!
//! The generated module exposes `IMAGES` (name → payload mapping), a
//! memoized `load_image(name)` accessor, and a chooser-UI `main()` that runs
//! only when the file is executed directly:
//!
//! ```python
//! import tkinter as tk
//! from images import load_image
//! root = tk.Tk()
//! tk.Label(image=load_image('dawn.png')).pack()
//! root.mainloop()
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`encoder`] | [`Encoder`](encoder::Encoder) strategy trait, the capable and raw implementations, and the base64 payload transform |
//! | [`generator`] | Renders the module text: mapping block, cached accessor, self-test viewer |
//! | [`pack`] | One conversion run — naming, encoding, generation, atomic write |
//! | [`naming`] | Logical-name derivation from source paths |
//! | [`types`] | [`ImageAsset`](types::ImageAsset) / [`EncodedAsset`](types::EncodedAsset) passed between stages |
//! | [`output`] | CLI report formatting |
//!
//! # Design Decisions
//!
//! ## Two Encoders, Chosen at Startup
//!
//! Image decoding and resizing live behind the default `imaging` cargo
//! feature. A full build selects the capable encoder (decode → optional
//! exact resize → PNG → base64); a `--no-default-features` build, or the
//! `--raw` flag, selects the minimal one, which embeds source bytes verbatim
//! and rejects resizing. One strategy trait, two implementations — no
//! capability conditionals scattered through the pipeline.
//!
//! ## PNG As the Canonical Embedded Format
//!
//! The capable encoder normalizes everything to PNG: lossless (no 256-color
//! palette squeeze a GIF re-encode would force), deterministic to encode,
//! and accepted by `tk.PhotoImage` on every supported Python 3.
//!
//! ## Reject, Don't Escape
//!
//! Payloads are pure base64 and can never contain the generated module's
//! `"""` delimiter. Logical names that could break the emitted syntax
//! (quotes, backslashes, control characters) and duplicate names are
//! rejected with a hard error rather than escaped or silently last-wins'd —
//! a generated module must either be syntactically valid and complete, or
//! not exist at all. The atomic output write enforces the same rule at the
//! file level.

pub mod encoder;
pub mod generator;
pub mod naming;
pub mod output;
pub mod pack;
pub mod types;
