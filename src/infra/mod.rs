// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Adapters for the entity-extraction collaborator. Both
// implement the EntityExtractor trait from Layer 3:
//
//   command_extractor.rs — runs an external NER program,
//                          sends the text on stdin and reads
//                          [{"value", "entity_group"}] JSON
//                          back from stdout
//
//   lexicon_extractor.rs — offline fallback: tags every
//                          whole-word occurrence of a term
//                          from a term,entity_group CSV
//
// The CLI picks one; the application layer only sees the trait.

/// External NER process adapter
pub mod command_extractor;

/// CSV lexicon adapter
pub mod lexicon_extractor;
