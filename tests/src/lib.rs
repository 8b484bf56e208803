//! System tests for the Exis lowering pass: trees are built through the
//! construction API, lowered, and then executed by the evaluator to check
//! runtime behavior rather than only tree shapes.

#[cfg(test)]
mod existential_lowering;

#[cfg(test)]
mod marker_hygiene;
