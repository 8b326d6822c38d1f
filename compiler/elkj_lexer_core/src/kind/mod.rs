//! Token kinds produced by the scanner.
//!
//! `TokenKind` is a single-byte discriminant with semantic ranges:
//!
//! | Range   | Category                 |
//! |---------|--------------------------|
//! | 0-5     | Structural punctuation   |
//! | 16-18   | Scalar literal keywords  |
//! | 32-45   | Reserved property keys   |
//! | 64-67   | Value terminals          |
//! | 112-114 | Trivia                   |
//! | 240     | Unrecognized             |
//!
//! The three spellings of a reserved key (`children`, `'children'`,
//! `"children"`) share one kind; the lexeme keeps the spelling.

use std::fmt;

/// Classification of a scanned token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TokenKind {
    // === Structural punctuation (0-5) ===
    /// `{`
    LeftBrace = 0,
    /// `}`
    RightBrace = 1,
    /// `,`
    Comma = 2,
    /// `:`
    Colon = 3,
    /// `[`
    LeftBracket = 4,
    /// `]`
    RightBracket = 5,

    // === Scalar literal keywords (16-18) ===
    True = 16,
    False = 17,
    Null = 18,

    // === Reserved property keys (32-45) ===
    KeyChildren = 32,
    KeyPorts = 33,
    KeyLabels = 34,
    KeyEdges = 35,
    KeyLayoutOptions = 36,
    KeyProperties = 37,
    KeyId = 38,
    KeyX = 39,
    KeyY = 40,
    KeyWidth = 41,
    KeyHeight = 42,
    KeySources = 43,
    KeyTargets = 44,
    KeyText = 45,

    // === Value terminals (64-67) ===
    /// Optional sign followed by decimal digits.
    SignedInt = 64,
    /// Decimal with a fraction, an exponent, or both.
    Float = 65,
    /// Identifier, optionally escaped with a leading `^`.
    Id = 66,
    /// Single- or double-quoted string, delimiters included.
    String = 67,

    // === Trivia (112-114) ===
    Whitespace = 112,
    /// `/* ... */`
    MlComment = 113,
    /// `// ...` including its line terminator.
    SlComment = 114,

    // === Fallback (240) ===
    /// One character no rule matches.
    Unrecognized = 240,
}

const _: () = assert!(std::mem::size_of::<TokenKind>() == 1);

impl TokenKind {
    /// Returns `true` for whitespace and comments.
    ///
    /// Trivia is produced by the scanner so spans tile the input, but the
    /// parser never sees it.
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::Whitespace | Self::MlComment | Self::SlComment)
    }

    #[inline]
    pub fn is_punctuation(self) -> bool {
        (self as u8) <= Self::RightBracket as u8
    }

    #[inline]
    pub fn is_property_key(self) -> bool {
        (Self::KeyChildren as u8..=Self::KeyText as u8).contains(&(self as u8))
    }

    /// Returns `true` for `SignedInt` and `Float`.
    #[inline]
    pub fn is_number(self) -> bool {
        matches!(self, Self::SignedInt | Self::Float)
    }

    /// The reserved key this kind stands for, if any.
    pub fn property_key(self) -> Option<PropertyKey> {
        let key = match self {
            Self::KeyChildren => PropertyKey::Children,
            Self::KeyPorts => PropertyKey::Ports,
            Self::KeyLabels => PropertyKey::Labels,
            Self::KeyEdges => PropertyKey::Edges,
            Self::KeyLayoutOptions => PropertyKey::LayoutOptions,
            Self::KeyProperties => PropertyKey::Properties,
            Self::KeyId => PropertyKey::Id,
            Self::KeyX => PropertyKey::X,
            Self::KeyY => PropertyKey::Y,
            Self::KeyWidth => PropertyKey::Width,
            Self::KeyHeight => PropertyKey::Height,
            Self::KeySources => PropertyKey::Sources,
            Self::KeyTargets => PropertyKey::Targets,
            Self::KeyText => PropertyKey::Text,
            _ => return None,
        };
        Some(key)
    }

    /// The single fixed spelling of this kind, if it has exactly one.
    ///
    /// Property keys have three spellings and return `None`, as do the
    /// pattern-matched kinds.
    pub fn lexeme(self) -> Option<&'static str> {
        match self {
            Self::LeftBrace => Some("{"),
            Self::RightBrace => Some("}"),
            Self::Comma => Some(","),
            Self::Colon => Some(":"),
            Self::LeftBracket => Some("["),
            Self::RightBracket => Some("]"),
            Self::True => Some("true"),
            Self::False => Some("false"),
            Self::Null => Some("null"),
            _ => None,
        }
    }

    /// Human-readable name used in token dumps and diagnostics.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::LeftBrace => "'{'",
            Self::RightBrace => "'}'",
            Self::Comma => "','",
            Self::Colon => "':'",
            Self::LeftBracket => "'['",
            Self::RightBracket => "']'",
            Self::True => "true",
            Self::False => "false",
            Self::Null => "null",
            Self::KeyChildren => "key children",
            Self::KeyPorts => "key ports",
            Self::KeyLabels => "key labels",
            Self::KeyEdges => "key edges",
            Self::KeyLayoutOptions => "key layoutOptions",
            Self::KeyProperties => "key properties",
            Self::KeyId => "key id",
            Self::KeyX => "key x",
            Self::KeyY => "key y",
            Self::KeyWidth => "key width",
            Self::KeyHeight => "key height",
            Self::KeySources => "key sources",
            Self::KeyTargets => "key targets",
            Self::KeyText => "key text",
            Self::SignedInt => "SIGNED_INT",
            Self::Float => "FLOAT",
            Self::Id => "ID",
            Self::String => "STRING",
            Self::Whitespace => "WS",
            Self::MlComment => "ML_COMMENT",
            Self::SlComment => "SL_COMMENT",
            Self::Unrecognized => "UNRECOGNIZED",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A reserved property key of the graph format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PropertyKey {
    Children,
    Ports,
    Labels,
    Edges,
    LayoutOptions,
    Properties,
    Id,
    X,
    Y,
    Width,
    Height,
    Sources,
    Targets,
    Text,
}

impl PropertyKey {
    /// All reserved keys, in rule declaration order.
    pub const ALL: [PropertyKey; 14] = [
        Self::Children,
        Self::Ports,
        Self::Labels,
        Self::Edges,
        Self::LayoutOptions,
        Self::Properties,
        Self::Id,
        Self::X,
        Self::Y,
        Self::Width,
        Self::Height,
        Self::Sources,
        Self::Targets,
        Self::Text,
    ];

    /// The bare spelling of the key.
    pub fn name(self) -> &'static str {
        match self {
            Self::Children => "children",
            Self::Ports => "ports",
            Self::Labels => "labels",
            Self::Edges => "edges",
            Self::LayoutOptions => "layoutOptions",
            Self::Properties => "properties",
            Self::Id => "id",
            Self::X => "x",
            Self::Y => "y",
            Self::Width => "width",
            Self::Height => "height",
            Self::Sources => "sources",
            Self::Targets => "targets",
            Self::Text => "text",
        }
    }

    /// The token kind all three spellings of this key scan to.
    pub fn token_kind(self) -> TokenKind {
        match self {
            Self::Children => TokenKind::KeyChildren,
            Self::Ports => TokenKind::KeyPorts,
            Self::Labels => TokenKind::KeyLabels,
            Self::Edges => TokenKind::KeyEdges,
            Self::LayoutOptions => TokenKind::KeyLayoutOptions,
            Self::Properties => TokenKind::KeyProperties,
            Self::Id => TokenKind::KeyId,
            Self::X => TokenKind::KeyX,
            Self::Y => TokenKind::KeyY,
            Self::Width => TokenKind::KeyWidth,
            Self::Height => TokenKind::KeyHeight,
            Self::Sources => TokenKind::KeySources,
            Self::Targets => TokenKind::KeyTargets,
            Self::Text => TokenKind::KeyText,
        }
    }

    /// The grammar slot this key fills.
    ///
    /// `properties` is accepted wherever `layoutOptions` is, so both map to
    /// [`KeyGroup::LayoutOptions`]. Every other key is its own group.
    pub fn group(self) -> KeyGroup {
        match self {
            Self::Children => KeyGroup::Children,
            Self::Ports => KeyGroup::Ports,
            Self::Labels => KeyGroup::Labels,
            Self::Edges => KeyGroup::Edges,
            Self::LayoutOptions | Self::Properties => KeyGroup::LayoutOptions,
            Self::Id => KeyGroup::Id,
            Self::X => KeyGroup::X,
            Self::Y => KeyGroup::Y,
            Self::Width => KeyGroup::Width,
            Self::Height => KeyGroup::Height,
            Self::Sources => KeyGroup::Sources,
            Self::Targets => KeyGroup::Targets,
            Self::Text => KeyGroup::Text,
        }
    }
}

impl fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Grammar slot of a reserved key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyGroup {
    Children,
    Ports,
    Labels,
    Edges,
    LayoutOptions,
    Id,
    X,
    Y,
    Width,
    Height,
    Sources,
    Targets,
    Text,
}
