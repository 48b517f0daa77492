use url::form_urlencoded;

/// Scalar that can travel as a Moodle form parameter
pub trait IntoRpcValue {
    fn into_rpc_value(self) -> String;
}

impl IntoRpcValue for String {
    fn into_rpc_value(self) -> String {
        self
    }
}

impl IntoRpcValue for &str {
    fn into_rpc_value(self) -> String {
        self.to_string()
    }
}

impl IntoRpcValue for &String {
    fn into_rpc_value(self) -> String {
        self.clone()
    }
}

/// Moodle expects booleans as 1/0
impl IntoRpcValue for bool {
    fn into_rpc_value(self) -> String {
        let flag = if self { "1" } else { "0" };
        flag.to_string()
    }
}

macro_rules! impl_into_rpc_value_for_int {
    ($($ty:ty),*) => {
        $(impl IntoRpcValue for $ty {
            fn into_rpc_value(self) -> String {
                self.to_string()
            }
        })*
    };
}

impl_into_rpc_value_for_int!(i32, i64, u32, u64, usize);

/// Form parameters for a web-service call, in insertion order.
///
/// Nested structures use PHP bracket keys: `courseids[0]`,
/// `plugindata[onlinetext_editor][text]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RpcParams {
    pairs: Vec<(String, String)>,
}

impl RpcParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key`, replacing any earlier value for the same key
    pub fn insert(&mut self, key: impl Into<String>, value: impl IntoRpcValue) -> &mut Self {
        let key = key.into();
        let value = value.into_rpc_value();
        match self.pairs.iter_mut().find(|(k, _)| *k == key) {
            Some(pair) => pair.1 = value,
            None => self.pairs.push((key, value)),
        }
        self
    }

    /// Builder form of [`RpcParams::insert`]
    pub fn with(mut self, key: impl Into<String>, value: impl IntoRpcValue) -> Self {
        self.insert(key, value);
        self
    }

    #[cfg(test)]
    pub(crate) fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub(crate) fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// `application/x-www-form-urlencoded` body, `leading` pairs first
    pub(crate) fn encode_with(&self, leading: &[(&str, &str)]) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in leading {
            serializer.append_pair(key, value);
        }
        for (key, value) in self.iter() {
            serializer.append_pair(key, value);
        }
        serializer.finish()
    }
}
