// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Orchestrates the other layers for one request:
//
//   extract entities (Layer 6) → filter (Layer 5)
//   load + merge catalog (Layer 4)
//   match → reorder → exclude allergens → format (Layer 5)
//
// Rules for this layer:
//   - No printing (that's Layer 1)
//   - No file or process access (Layers 4 and 6)
//   - Only workflow coordination and error recovery

// The recommendation workflow
pub mod recommend_use_case;
