//! JSON schema construction for tool registration.

use std::sync::Arc;

use serde_json::{Map, Value};

/// Builder for creating JSON schemas for tool registration
pub struct SchemaBuilder {
    properties: Map<String, Value>,
    required:   Vec<String>,
}

impl SchemaBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self {
            properties: Map::new(),
            required:   Vec::new(),
        }
    }

    /// Add a string property to the schema
    pub fn add_string_property(mut self, name: &str, description: &str, required: bool) -> Self {
        let mut prop = Map::new();
        prop.insert("type".to_string(), "string".into());
        prop.insert("description".to_string(), description.into());
        self.properties.insert(name.to_string(), prop.into());

        if required {
            self.required.push(name.to_string());
        }

        self
    }

    /// Add an integer property to the schema, with optional bounds
    pub fn add_integer_property(
        mut self,
        name: &str,
        description: &str,
        minimum: Option<u64>,
        maximum: Option<u64>,
        required: bool,
    ) -> Self {
        let mut prop = Map::new();
        prop.insert("type".to_string(), "integer".into());
        prop.insert("description".to_string(), description.into());

        if let Some(minimum) = minimum {
            prop.insert("minimum".to_string(), minimum.into());
        }
        if let Some(maximum) = maximum {
            prop.insert("maximum".to_string(), maximum.into());
        }

        self.properties.insert(name.to_string(), prop.into());

        if required {
            self.required.push(name.to_string());
        }

        self
    }

    /// Add a boolean property to the schema
    pub fn add_boolean_property(mut self, name: &str, description: &str, required: bool) -> Self {
        let mut prop = Map::new();
        prop.insert("type".to_string(), "boolean".into());
        prop.insert("description".to_string(), description.into());
        self.properties.insert(name.to_string(), prop.into());

        if required {
            self.required.push(name.to_string());
        }

        self
    }

    /// Add a string array property to the schema
    pub fn add_string_array_property(
        mut self,
        name: &str,
        description: &str,
        required: bool,
    ) -> Self {
        let mut prop = Map::new();
        prop.insert("type".to_string(), "array".into());

        let mut items = Map::new();
        items.insert("type".to_string(), "string".into());
        prop.insert("items".to_string(), items.into());

        prop.insert("description".to_string(), description.into());
        self.properties.insert(name.to_string(), prop.into());

        if required {
            self.required.push(name.to_string());
        }

        self
    }

    /// Build the final schema
    pub fn build(self) -> Arc<Map<String, Value>> {
        let mut schema = Map::new();
        schema.insert("type".to_string(), "object".into());
        schema.insert("properties".to_string(), self.properties.into());

        if !self.required.is_empty() {
            schema.insert("required".to_string(), self.required.into());
        }

        Arc::new(schema)
    }
}

impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}
