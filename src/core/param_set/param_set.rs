use std::collections::HashMap;

use crate::core::base::Float;

/// Keyed parameter bag handed to the shape factories. Values keep
/// their insertion order within a key.
#[derive(Debug, Clone, Default)]
pub struct ParamSet {
    bools: HashMap<String, Vec<bool>>,
    floats: HashMap<String, Vec<Float>>,
    strings: HashMap<String, Vec<String>>,
}

fn add_value<T: Clone>(m: &mut HashMap<String, Vec<T>>, key: &str, v: T) {
    m.entry(String::from(key)).or_default().push(v);
}

fn add_values<T: Clone>(m: &mut HashMap<String, Vec<T>>, key: &str, v: &[T]) {
    m.insert(String::from(key), v.to_vec());
}

fn get_values<'a, T>(m: &'a HashMap<String, Vec<T>>, key: &str) -> Option<&'a [T]> {
    return m.get(key).map(|v| v.as_slice());
}

impl ParamSet {
    pub fn new() -> Self {
        return ParamSet::default();
    }

    //--------------------

    pub fn add_bool(&mut self, key: &str, v: bool) {
        add_value(&mut self.bools, key, v);
    }

    pub fn add_bools(&mut self, key: &str, v: &[bool]) {
        add_values(&mut self.bools, key, v);
    }

    pub fn add_float(&mut self, key: &str, v: Float) {
        add_value(&mut self.floats, key, v);
    }

    pub fn add_floats(&mut self, key: &str, v: &[Float]) {
        add_values(&mut self.floats, key, v);
    }

    pub fn add_string(&mut self, key: &str, v: &str) {
        add_value(&mut self.strings, key, String::from(v));
    }

    pub fn add_strings(&mut self, key: &str, v: &[&str]) {
        let vv: Vec<String> = v.iter().map(|s| String::from(*s)).collect();
        add_values(&mut self.strings, key, &vv);
    }

    //--------------------

    pub fn get_bools(&self, key: &str) -> Option<&[bool]> {
        return get_values(&self.bools, key);
    }

    pub fn get_floats(&self, key: &str) -> Option<&[Float]> {
        return get_values(&self.floats, key);
    }

    pub fn get_strings(&self, key: &str) -> Option<&[String]> {
        return get_values(&self.strings, key);
    }

    //--------------------

    pub fn find_one_bool(&self, key: &str, value: bool) -> bool {
        match self.get_bools(key) {
            Some(v) if !v.is_empty() => v[0],
            _ => value,
        }
    }

    pub fn find_one_float(&self, key: &str, value: Float) -> Float {
        match self.get_floats(key) {
            Some(v) if !v.is_empty() => v[0],
            _ => value,
        }
    }

    pub fn find_one_string(&self, key: &str, value: &str) -> String {
        match self.get_strings(key) {
            Some(v) if !v.is_empty() => v[0].clone(),
            _ => String::from(value),
        }
    }
}

//-------------------------------------------------------------
