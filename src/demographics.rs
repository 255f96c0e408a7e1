//! Personally significant dates checked against an MPIN.

/// Identifier of the user's own date of birth.
pub const DOB_SELF: &str = "dob_self";
/// Identifier of the spouse's date of birth.
pub const DOB_SPOUSE: &str = "dob_spouse";
/// Identifier of the wedding anniversary.
pub const ANNIVERSARY: &str = "anniversary";

/// A named date. `date` is an ISO `YYYY-MM-DD` string, or `None` when unknown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemographicDate {
    pub name: String,
    pub date: Option<String>,
}

impl DemographicDate {
    pub fn new(name: impl Into<String>, date: Option<impl Into<String>>) -> Self {
        Self {
            name: name.into(),
            date: date.map(Into::into),
        }
    }

    /// The date value, treating an empty string like an absent one.
    pub fn value(&self) -> Option<&str> {
        self.date.as_deref().filter(|d| !d.is_empty())
    }
}

/// Ordered list of demographic dates.
///
/// Order is preserved as supplied and drives the order of demographic
/// reasons in an evaluation. Names are unique, compared case-insensitively:
/// re-adding a name keeps its first position and takes the new value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Demographics {
    dates: Vec<DemographicDate>,
}

impl Demographics {
    pub fn new() -> Self {
        Self::default()
    }

    /// The three dates collected by the MPIN form, in form order.
    pub fn standard(dob_self: Option<&str>, dob_spouse: Option<&str>, anniversary: Option<&str>) -> Self {
        Self::new()
            .with(DOB_SELF, dob_self)
            .with(DOB_SPOUSE, dob_spouse)
            .with(ANNIVERSARY, anniversary)
    }

    /// Adds a named date, builder style. A name already present keeps its
    /// position and takes the new value.
    pub fn with(mut self, name: impl Into<String>, date: Option<impl Into<String>>) -> Self {
        self.push(name, date);
        self
    }

    pub fn push(&mut self, name: impl Into<String>, date: Option<impl Into<String>>) {
        self.insert(DemographicDate::new(name, date));
    }

    fn insert(&mut self, entry: DemographicDate) {
        let key = entry.name.to_uppercase();
        match self.dates.iter_mut().find(|d| d.name.to_uppercase() == key) {
            Some(existing) => existing.date = entry.date,
            None => self.dates.push(entry),
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DemographicDate> {
        self.dates.iter()
    }

    /// Dates that carry a value, in order.
    pub fn present(&self) -> impl Iterator<Item = (&str, &str)> {
        self.dates
            .iter()
            .filter_map(|d| d.value().map(|v| (d.name.as_str(), v)))
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

impl<'a> IntoIterator for &'a Demographics {
    type Item = &'a DemographicDate;
    type IntoIter = std::slice::Iter<'a, DemographicDate>;

    fn into_iter(self) -> Self::IntoIter {
        self.dates.iter()
    }
}

impl FromIterator<DemographicDate> for Demographics {
    fn from_iter<T: IntoIterator<Item = DemographicDate>>(iter: T) -> Self {
        let mut demographics = Self::new();
        for entry in iter {
            demographics.insert(entry);
        }
        demographics
    }
}
