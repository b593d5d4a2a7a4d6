// WASM bindings for word ladder distances.
//
// Provides a `WasmLadder` class exported via wasm-bindgen that wraps the
// `LadderHandle` from wordladder-graph. Structured results (components,
// ladder trees, visualization data) are serialized to JavaScript values
// using serde-wasm-bindgen. Layout and drawing stay on the JavaScript side.
//
// Usage from JavaScript:
//
//   const ladder = new WasmLadder(["cat", "cut", "coat"], true);
//   ladder.distance("cat", "cut");       // => 1 (undefined if unreachable)
//   ladder.neighbors("cat");             // => ["coat", "cut"]
//   ladder.shortestPath("cut", "coat");  // => ["cut", "cat", "coat"]
//   ladder.components();                 // => [["cat", "coat", "cut"]]
//   ladder.visualizationData();          // => { words, distances, edges, components }

use serde::Serialize;
use wasm_bindgen::prelude::*;

use wordladder_core::LadderError;
use wordladder_core::alphabet::SAMPLE_WORDS;
use wordladder_core::vocabulary::Vocabulary;
use wordladder_core::word::Word;
use wordladder_graph::handle::{LadderHandle, LadderOptions};
use wordladder_graph::paths::LadderNode;
use wordladder_graph::transform::TransformOptions;

// ============================================================================
// Serde-serializable DTO types for JS interop
// ============================================================================

/// Serializable representation of a ladder tree node.
#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
struct JsLadderNode {
    word: String,
    depth: u32,
    paths: Vec<Vec<String>>,
}

// ============================================================================
// Conversion helpers
// ============================================================================

fn words_to_strings<'a>(words: impl IntoIterator<Item = &'a Word>) -> Vec<String> {
    words.into_iter().map(|w| w.as_str().to_string()).collect()
}

fn node_to_js(node: LadderNode) -> JsLadderNode {
    JsLadderNode {
        word: node.word.into_string(),
        depth: node.depth,
        paths: node
            .paths
            .iter()
            .map(|p| words_to_strings(p))
            .collect(),
    }
}

fn build_handle(words: &[String], allow_possessives: bool) -> Result<LadderHandle, LadderError> {
    let vocabulary = Vocabulary::from_strs(words)?;
    let options = LadderOptions {
        transform: TransformOptions {
            allow_possessives,
            ..TransformOptions::default()
        },
    };
    Ok(LadderHandle::with_options(vocabulary, &options))
}

fn ladder_error_to_js(e: LadderError) -> JsError {
    JsError::new(&e.to_string())
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&e.to_string()))
}

// ============================================================================
// WasmLadder
// ============================================================================

/// Word ladder distances over a fixed vocabulary, for WebAssembly.
#[wasm_bindgen]
pub struct WasmLadder {
    handle: LadderHandle,
}

#[wasm_bindgen]
impl WasmLadder {
    /// Build the word graph for `words`.
    ///
    /// - `words`: the vocabulary (lowercase, no whitespace)
    /// - `allow_possessives`: treat adding/removing "'s" as one step (default true)
    #[wasm_bindgen(constructor)]
    pub fn new(words: Vec<String>, allow_possessives: Option<bool>) -> Result<WasmLadder, JsError> {
        let handle = build_handle(&words, allow_possessives.unwrap_or(true))
            .map_err(ladder_error_to_js)?;
        Ok(WasmLadder { handle })
    }

    /// The bundled sample vocabulary.
    #[wasm_bindgen(js_name = "sampleWords")]
    pub fn sample_words() -> Vec<String> {
        SAMPLE_WORDS.iter().map(|w| w.to_string()).collect()
    }

    /// Vocabulary in the stable order used by every matrix and index.
    pub fn words(&self) -> Vec<String> {
        words_to_strings(self.handle.vocabulary())
    }

    /// Shortest ladder length, or `undefined` if no ladder exists.
    ///
    /// Throws if either word is not in the vocabulary.
    pub fn distance(&self, a: &str, b: &str) -> Result<Option<u32>, JsError> {
        self.handle
            .distance(a, b)
            .map(|d| d.steps())
            .map_err(ladder_error_to_js)
    }

    /// Vocabulary words one step away from `word`.
    pub fn neighbors(&self, word: &str) -> Result<Vec<String>, JsError> {
        let found = self
            .handle
            .transformations_in_vocabulary(word)
            .map_err(ladder_error_to_js)?;
        Ok(words_to_strings(&found))
    }

    /// One shortest ladder as an array of words, or `null` if unreachable.
    #[wasm_bindgen(js_name = "shortestPath")]
    pub fn shortest_path(&self, a: &str, b: &str) -> Result<JsValue, JsError> {
        let path = self
            .handle
            .shortest_path(a, b)
            .map_err(ladder_error_to_js)?
            .map(|p| words_to_strings(&p));
        to_js(&path)
    }

    /// Every shortest ladder from `a` to `b`.
    #[wasm_bindgen(js_name = "allShortestPaths")]
    pub fn all_shortest_paths(&self, a: &str, b: &str) -> Result<JsValue, JsError> {
        let paths: Vec<Vec<String>> = self
            .handle
            .all_shortest_paths(a, b)
            .map_err(ladder_error_to_js)?
            .iter()
            .map(|p| words_to_strings(p))
            .collect();
        to_js(&paths)
    }

    /// Words within `max_depth` steps of `start` with their ladders.
    ///
    /// Returns an array of `{ word, depth, paths }` objects.
    #[wasm_bindgen(js_name = "ladderTree")]
    pub fn ladder_tree(&self, start: &str, max_depth: u32) -> Result<JsValue, JsError> {
        let nodes: Vec<JsLadderNode> = self
            .handle
            .ladder_tree(start, max_depth)
            .map_err(ladder_error_to_js)?
            .into_iter()
            .map(node_to_js)
            .collect();
        to_js(&nodes)
    }

    /// Connected components as arrays of words.
    pub fn components(&self) -> Result<JsValue, JsError> {
        let comps: Vec<Vec<String>> = self
            .handle
            .connected_components()
            .iter()
            .map(|c| words_to_strings(c))
            .collect();
        to_js(&comps)
    }

    /// Words whose removal disconnects part of the vocabulary.
    #[wasm_bindgen(js_name = "bridgeWords")]
    pub fn bridge_words(&self) -> Vec<String> {
        words_to_strings(&self.handle.bridge_words())
    }

    /// `{ words, distances, edges, components }` for layout and drawing.
    ///
    /// `distances[i][j]` is `null` for unreachable pairs.
    #[wasm_bindgen(js_name = "visualizationData")]
    pub fn visualization_data(&self) -> Result<JsValue, JsError> {
        to_js(&self.handle.visualization_data())
    }

    /// Release the instance (optional; dropping it has the same effect).
    pub fn terminate(self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_handle_respects_possessive_flag() {
        let words = vec!["cat".to_string(), "cat's".to_string()];
        let with = build_handle(&words, true).unwrap();
        assert_eq!(with.distance("cat", "cat's").unwrap().steps(), Some(1));
        let without = build_handle(&words, false).unwrap();
        assert_eq!(without.distance("cat", "cat's").unwrap().steps(), None);
    }

    #[test]
    fn build_handle_rejects_invalid_words() {
        let words = vec!["Cat".to_string()];
        assert!(matches!(
            build_handle(&words, true),
            Err(LadderError::InvalidWord(_, _))
        ));
    }

    #[test]
    fn ladder_node_conversion() {
        let handle = build_handle(
            &["arts".to_string(), "parts".to_string(), "part".to_string()],
            true,
        )
        .unwrap();
        let nodes: Vec<JsLadderNode> = handle
            .ladder_tree("arts", 2)
            .unwrap()
            .into_iter()
            .map(node_to_js)
            .collect();
        assert_eq!(
            nodes.last(),
            Some(&JsLadderNode {
                word: "part".to_string(),
                depth: 2,
                paths: vec![vec![
                    "arts".to_string(),
                    "parts".to_string(),
                    "part".to_string()
                ]],
            })
        );
    }
}
