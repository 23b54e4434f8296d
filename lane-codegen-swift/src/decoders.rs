//! Shared decoder helpers that turn the runner's raw string replies into
//! rich values.

use lanebridge_codegen::ValueType;

/// Swift source for the decoder helpers, emitted once into the aggregate file.
///
/// Inputs shorter than two characters cannot hold a JSON collection and
/// decode to an empty one.
pub const DECODERS: &str = r#"// Decoders turning the runner's string replies into the declared return types
func parseArray(fromString: String) -> [String] {
  guard fromString.count >= 2, let data = fromString.data(using: .utf8) else {
    return []
  }
  guard let array = (try? JSONSerialization.jsonObject(with: data, options: [])) as? [String] else {
    return []
  }
  return array
}

func parseDictionary(fromString: String) -> [String : String] {
  guard fromString.count >= 2, let data = fromString.data(using: .utf8) else {
    return [:]
  }
  guard let dictionary = (try? JSONSerialization.jsonObject(with: data, options: [])) as? [String : String] else {
    return [:]
  }
  return dictionary
}

func parseBool(fromString: String) -> Bool {
  return NSString(string: fromString.trimmingCharacters(in: .whitespaces)).boolValue
}

func parseInt(fromString: String) -> Int {
  return NSString(string: fromString.trimmingCharacters(in: .whitespaces)).integerValue
}"#;

/// Decoder applied to `runner.executeCommand(command)` for a return type;
/// `None` when the raw string is returned as is.
pub fn decoder_for(ty: ValueType) -> Option<&'static str> {
    match ty {
        ValueType::String => None,
        ValueType::Bool => Some("parseBool"),
        ValueType::Int => Some("parseInt"),
        ValueType::Array => Some("parseArray"),
        ValueType::Map => Some("parseDictionary"),
    }
}
