use bson::Document;

#[derive(Debug, Default, Clone, PartialEq)]
pub struct EventsFilter {
    pub venue: Option<String>,
    pub category: Option<String>,
    pub performer: Option<String>,
    pub is_available: Option<bool>,
}

impl EventsFilter {
    pub fn as_document(&self) -> Document {
        let mut filter = Document::new();
        if let Some(venue) = &self.venue {
            filter.insert("venue", venue);
        }
        if let Some(category) = &self.category {
            filter.insert("categories", category);
        }
        if let Some(performer) = &self.performer {
            filter.insert("performers", performer);
        }
        if let Some(is_available) = self.is_available {
            filter.insert("is_available", is_available);
        }

        filter
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventsSortField {
    CreatedAt,
    Date,
    Name,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventsSort {
    pub field: EventsSortField,
    pub descending: bool,
}

impl EventsSort {
    pub fn as_document(&self) -> Document {
        let field = match self.field {
            EventsSortField::CreatedAt => "created_at",
            EventsSortField::Date => "date",
            EventsSortField::Name => "name",
        };
        let order = match self.descending {
            true => -1,
            false => 1,
        };

        let mut sort = Document::new();
        sort.insert(field, order);

        sort
    }
}

impl Default for EventsSort {
    fn default() -> Self {
        Self {
            field: EventsSortField::CreatedAt,
            descending: true,
        }
    }
}
