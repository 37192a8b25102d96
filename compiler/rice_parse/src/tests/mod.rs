//! Driver tests over small hand-written dumps.
