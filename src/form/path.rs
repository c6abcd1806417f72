//! Field identifiers.
//!
//! Every leaf of a contact is addressed by a [`FieldPath`]: a scalar contact
//! field, or a field of the phone or address record at some index.

use std::fmt;

/// Scalar fields of a contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContactField {
    Id,
    Icon,
    Personal,
    FirstName,
    LastName,
    DateOfBirth,
    FavoritesRanking,
    Notes,
}

/// Fields of a phone record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PhoneField {
    Number,
    Type,
    Preferred,
}

/// Fields of an address record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AddressField {
    Street,
    City,
    State,
    PostalCode,
    Type,
}

/// Address of one leaf field within a contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldPath {
    Contact(ContactField),
    Phone { index: usize, field: PhoneField },
    Address { index: usize, field: AddressField },
}

impl FieldPath {
    pub fn phone(index: usize, field: PhoneField) -> Self {
        Self::Phone { index, field }
    }

    pub fn address(index: usize, field: AddressField) -> Self {
        Self::Address { index, field }
    }
}

impl From<ContactField> for FieldPath {
    fn from(field: ContactField) -> Self {
        Self::Contact(field)
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Id => "id",
            Self::Icon => "icon",
            Self::Personal => "personal",
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::DateOfBirth => "dateOfBirth",
            Self::FavoritesRanking => "favoritesRanking",
            Self::Notes => "notes",
        };
        f.write_str(name)
    }
}

impl fmt::Display for PhoneField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Number => "phoneNumber",
            Self::Type => "phoneType",
            Self::Preferred => "preferred",
        };
        f.write_str(name)
    }
}

impl fmt::Display for AddressField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Street => "streetAddress",
            Self::City => "city",
            Self::State => "state",
            Self::PostalCode => "postalCode",
            Self::Type => "addressType",
        };
        f.write_str(name)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Contact(field) => write!(f, "{}", field),
            Self::Phone { index, field } => write!(f, "phones[{}].{}", index, field),
            Self::Address { index, field } => write!(f, "addresses[{}].{}", index, field),
        }
    }
}
