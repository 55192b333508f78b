//! The `define_entity!` macro: one declaration per entity type expands to
//! the immutable value type, its staged builder chain, copy builder,
//! reference-only constructor, field-wise equality/rendering, serde
//! support, query field tokens, and the [`Model`](crate::Model) impl.
//!
//! Declaration shape (one invocation per module):
//!
//! ```ignore
//! crate::define_entity! {
//!     /// Doc comment for the entity type.
//!     pub Garment {
//!         entity_type: "Garment",
//!         plural: "Garments",
//!         version: 1,
//!         auth: owner "owner" [Create, Read, Update, Delete],
//!         identity: id ("id", ID),
//!         fields: {
//!             required label ("label", LABEL): String as Text => LabelStep;
//!             optional archived ("archived", ARCHIVED): bool as Bool;
//!             read_only created_at ("createdAt", CREATED_AT): Timestamp as Timestamp;
//!         }
//!     }
//! }
//! ```
//!
//! Fields are listed in declared schema order; that order drives equality,
//! hashing, rendering, the schema descriptor, and the field-token catalog.
//! Required fields additionally name the builder stage that supplies them;
//! stages chain in declared order and collapse into the terminal
//! `BuildStep`. Read-only fields get no setter anywhere: they are owned
//! by the persistence layer and only enter an entity when a stored record
//! is deserialized.

/// Expands an entity schema declaration into its full generated model.
#[macro_export]
macro_rules! define_entity {
    (
        $(#[$meta:meta])*
        pub $Entity:ident {
            entity_type: $etype:literal,
            plural: $plural:literal,
            version: $version:literal,
            auth: owner $owner:literal [ $($op:ident),+ $(,)? ],
            identity: $id:ident ($id_name:literal, $ID:ident),
            fields: { $($decl:tt)* }
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(transparent)]
        pub struct $Entity {
            repr: Repr,
        }

        // Full records keep required fields non-optional; the staged
        // builder is the only writable path to this variant, so the
        // required-field invariant is carried by the type. Variant order
        // matters for untagged deserialization: Full is tried first.
        #[derive(Debug, Clone, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Full(Fields),
            ReferenceOnly(Reference),
        }

        #[derive(Debug, Clone, ::serde::Serialize, ::serde::Deserialize)]
        struct Reference {
            #[serde(rename = $id_name)]
            $id: String,
        }

        impl $Entity {
            /// Traversal origin token: no field selected yet.
            pub const ROOT: $crate::QueryRoot = $crate::QueryRoot::new($etype);

            /// Query token for the identity field.
            pub const $ID: $crate::QueryField = $crate::QueryField::new($etype, $id_name);

            /// The unique identifier of this record.
            pub fn $id(&self) -> &str {
                match &self.repr {
                    Repr::Full(fields) => &fields.$id,
                    Repr::ReferenceOnly(reference) => &reference.$id,
                }
            }

            /// References an existing record by identifier alone; every
            /// other field is left absent. Intended for delete targets and
            /// relationship links, never for creating new data.
            #[must_use]
            pub fn just_id($id: impl Into<String>) -> Self {
                Self {
                    repr: Repr::ReferenceOnly(Reference { $id: $id.into() }),
                }
            }
        }

        $crate::define_entity!(@record ($id, $id_name) [] $($decl)*);
        $crate::define_entity!(@accessors $Entity [] $($decl)*);
        $crate::define_entity!(@model ($Entity, $etype, $plural, $version, $owner [ $($op),+ ], $id, $id_name, $ID) [] [] $($decl)*);
        $crate::define_entity!(@glue ($Entity, $etype, $id, $id_name) [] [] $($decl)*);
        $crate::define_entity!(@required $Entity [] $($decl)*);
        $crate::define_entity!(@late ($Entity, $etype, $id) [] [] [] $($decl)*);
    };

    // ── Fields record ────────────────────────────────────────────────

    (@record ($id:ident, $id_name:literal) [ $($acc:tt)* ]
        required $f:ident ($n:literal, $C:ident): $t:ty as $ft:ident => $S:ident; $($rest:tt)*) => {
        $crate::define_entity!(@record ($id, $id_name)
            [ $($acc)* #[serde(rename = $n)] $f: $t, ] $($rest)*);
    };
    (@record ($id:ident, $id_name:literal) [ $($acc:tt)* ]
        $kind:ident $f:ident ($n:literal, $C:ident): $t:ty as $ft:ident; $($rest:tt)*) => {
        $crate::define_entity!(@record ($id, $id_name)
            [ $($acc)* #[serde(rename = $n, default, skip_serializing_if = "Option::is_none")] $f: Option<$t>, ] $($rest)*);
    };
    (@record ($id:ident, $id_name:literal) [ $($acc:tt)* ]) => {
        #[derive(Debug, Clone, ::serde::Serialize, ::serde::Deserialize)]
        struct Fields {
            #[serde(rename = $id_name)]
            $id: String,
            $($acc)*
        }
    };

    // ── Accessors ────────────────────────────────────────────────────

    (@accessors $Entity:ident [ $($acc:tt)* ]
        required $f:ident ($n:literal, $C:ident): $t:ty as Text => $S:ident; $($rest:tt)*) => {
        $crate::define_entity!(@accessors $Entity [ $($acc)*
            pub fn $f(&self) -> Option<&str> {
                match &self.repr {
                    Repr::Full(fields) => Some(fields.$f.as_str()),
                    Repr::ReferenceOnly(_) => None,
                }
            }
        ] $($rest)*);
    };
    (@accessors $Entity:ident [ $($acc:tt)* ]
        required $f:ident ($n:literal, $C:ident): $t:ty as Json => $S:ident; $($rest:tt)*) => {
        $crate::define_entity!(@accessors $Entity [ $($acc)*
            pub fn $f(&self) -> Option<&str> {
                match &self.repr {
                    Repr::Full(fields) => Some(fields.$f.as_str()),
                    Repr::ReferenceOnly(_) => None,
                }
            }
        ] $($rest)*);
    };
    (@accessors $Entity:ident [ $($acc:tt)* ]
        required $f:ident ($n:literal, $C:ident): $t:ty as $ft:ident => $S:ident; $($rest:tt)*) => {
        $crate::define_entity!(@accessors $Entity [ $($acc)*
            pub fn $f(&self) -> Option<$t> {
                match &self.repr {
                    Repr::Full(fields) => Some(fields.$f),
                    Repr::ReferenceOnly(_) => None,
                }
            }
        ] $($rest)*);
    };
    (@accessors $Entity:ident [ $($acc:tt)* ]
        $kind:ident $f:ident ($n:literal, $C:ident): $t:ty as Text; $($rest:tt)*) => {
        $crate::define_entity!(@accessors $Entity [ $($acc)*
            pub fn $f(&self) -> Option<&str> {
                match &self.repr {
                    Repr::Full(fields) => fields.$f.as_deref(),
                    Repr::ReferenceOnly(_) => None,
                }
            }
        ] $($rest)*);
    };
    (@accessors $Entity:ident [ $($acc:tt)* ]
        $kind:ident $f:ident ($n:literal, $C:ident): $t:ty as Json; $($rest:tt)*) => {
        $crate::define_entity!(@accessors $Entity [ $($acc)*
            pub fn $f(&self) -> Option<&str> {
                match &self.repr {
                    Repr::Full(fields) => fields.$f.as_deref(),
                    Repr::ReferenceOnly(_) => None,
                }
            }
        ] $($rest)*);
    };
    (@accessors $Entity:ident [ $($acc:tt)* ]
        $kind:ident $f:ident ($n:literal, $C:ident): $t:ty as $ft:ident; $($rest:tt)*) => {
        $crate::define_entity!(@accessors $Entity [ $($acc)*
            pub fn $f(&self) -> Option<$t> {
                match &self.repr {
                    Repr::Full(fields) => fields.$f,
                    Repr::ReferenceOnly(_) => None,
                }
            }
        ] $($rest)*);
    };
    (@accessors $Entity:ident [ $($acc:tt)* ]) => {
        impl $Entity {
            $($acc)*
        }
    };

    // ── Query tokens, schema, Model impl ─────────────────────────────

    (@model ($($ctx:tt)*) [ $($cat:tt)* ] [ $($fd:tt)* ]
        required $f:ident ($n:literal, $C:ident): $t:ty as Enum => $S:ident; $($rest:tt)*) => {
        $crate::define_entity!(@model ($($ctx)*)
            [ $($cat)* ($C, $n) ]
            [ $($fd)* ($crate::FieldDef::enumeration($n, <$t>::NAMES).required()) ]
            $($rest)*);
    };
    (@model ($($ctx:tt)*) [ $($cat:tt)* ] [ $($fd:tt)* ]
        required $f:ident ($n:literal, $C:ident): $t:ty as $ft:ident => $S:ident; $($rest:tt)*) => {
        $crate::define_entity!(@model ($($ctx)*)
            [ $($cat)* ($C, $n) ]
            [ $($fd)* ($crate::FieldDef::new($n, $crate::FieldType::$ft).required()) ]
            $($rest)*);
    };
    (@model ($($ctx:tt)*) [ $($cat:tt)* ] [ $($fd:tt)* ]
        optional $f:ident ($n:literal, $C:ident): $t:ty as Enum; $($rest:tt)*) => {
        $crate::define_entity!(@model ($($ctx)*)
            [ $($cat)* ($C, $n) ]
            [ $($fd)* ($crate::FieldDef::enumeration($n, <$t>::NAMES)) ]
            $($rest)*);
    };
    (@model ($($ctx:tt)*) [ $($cat:tt)* ] [ $($fd:tt)* ]
        optional $f:ident ($n:literal, $C:ident): $t:ty as $ft:ident; $($rest:tt)*) => {
        $crate::define_entity!(@model ($($ctx)*)
            [ $($cat)* ($C, $n) ]
            [ $($fd)* ($crate::FieldDef::new($n, $crate::FieldType::$ft)) ]
            $($rest)*);
    };
    (@model ($($ctx:tt)*) [ $($cat:tt)* ] [ $($fd:tt)* ]
        read_only $f:ident ($n:literal, $C:ident): $t:ty as $ft:ident; $($rest:tt)*) => {
        $crate::define_entity!(@model ($($ctx)*)
            [ $($cat)* ($C, $n) ]
            [ $($fd)* ($crate::FieldDef::new($n, $crate::FieldType::$ft).read_only()) ]
            $($rest)*);
    };
    (@model ($Entity:ident, $etype:literal, $plural:literal, $version:literal, $owner:literal [ $($op:ident),+ ], $id:ident, $id_name:literal, $ID:ident)
        [ $(($C:ident, $n:literal))* ] [ $(($($fd:tt)*))* ]) => {
        impl $Entity {
            $(
                pub const $C: $crate::QueryField = $crate::QueryField::new($etype, $n);
            )*
        }

        impl $crate::Model for $Entity {
            const ENTITY_TYPE: &'static str = $etype;
            const PLURAL: &'static str = $plural;
            const FIELDS: &'static [$crate::QueryField] = &[Self::$ID $(, Self::$C)*];

            fn schema() -> $crate::EntitySchema {
                $crate::EntitySchema {
                    entity_type: $etype.into(),
                    plural_name: $plural.into(),
                    version: $version,
                    identity_field: $id_name.into(),
                    fields: vec![
                        $crate::FieldDef::new($id_name, $crate::FieldType::Id).required()
                        $(, $($fd)*)*
                    ],
                    auth: $crate::AuthRule::owner($owner, &[$($crate::Operation::$op),+]),
                }
            }

            fn identity(&self) -> &str {
                self.$id()
            }

            fn is_reference_only(&self) -> bool {
                matches!(self.repr, Repr::ReferenceOnly(_))
            }
        }
    };

    // ── Equality, hashing, rendering ─────────────────────────────────

    (@glue ($($ctx:tt)*) [ $($fs:tt)* ] [ $($ds:tt)* ]
        required $f:ident ($n:literal, $C:ident): $t:ty as $ft:ident => $S:ident; $($rest:tt)*) => {
        $crate::define_entity!(@glue ($($ctx)*) [ $($fs)* $f ] [ $($ds)* ($f, $n) ] $($rest)*);
    };
    (@glue ($($ctx:tt)*) [ $($fs:tt)* ] [ $($ds:tt)* ]
        $kind:ident $f:ident ($n:literal, $C:ident): $t:ty as $ft:ident; $($rest:tt)*) => {
        $crate::define_entity!(@glue ($($ctx)*) [ $($fs)* $f ] [ $($ds)* ($f, $n) ] $($rest)*);
    };
    (@glue ($Entity:ident, $etype:literal, $id:ident, $id_name:literal)
        [ $($fs:ident)* ] [ $(($df:ident, $dn:literal))* ]) => {
        // Field-wise through the accessors, so a reference-only record and
        // a full record compare on their absence patterns, never on the
        // variant itself.
        impl PartialEq for $Entity {
            fn eq(&self, other: &Self) -> bool {
                self.$id() == other.$id() $(&& self.$fs() == other.$fs())*
            }
        }

        impl Eq for $Entity {}

        impl ::std::hash::Hash for $Entity {
            fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                ::std::hash::Hash::hash(&self.$id(), state);
                $(
                    ::std::hash::Hash::hash(&self.$fs(), state);
                )*
            }
        }

        impl ::std::fmt::Display for $Entity {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{} {{{}={}", $etype, $id_name, self.$id())?;
                $(
                    match self.$df() {
                        Some(value) => write!(f, ", {}={}", $dn, value)?,
                        None => write!(f, ", {}=<absent>", $dn)?,
                    }
                )*
                write!(f, "}}")
            }
        }
    };

    // ── Staged builder chain ─────────────────────────────────────────

    (@required $Entity:ident [ $($acc:tt)* ]
        required $f:ident ($n:literal, $C:ident): $t:ty as $ft:ident => $S:ident; $($rest:tt)*) => {
        $crate::define_entity!(@required $Entity [ $($acc)* ($f: $t => $S) ] $($rest)*);
    };
    (@required $Entity:ident [ $($acc:tt)* ]
        $kind:ident $f:ident ($n:literal, $C:ident): $t:ty as $ft:ident; $($rest:tt)*) => {
        $crate::define_entity!(@required $Entity [ $($acc)* ] $($rest)*);
    };
    (@required $Entity:ident [ $($acc:tt)* ]) => {
        $crate::define_entity!(@stages_entry $Entity [ $($acc)* ]);
    };

    (@stages_entry $Entity:ident []) => {
        impl $Entity {
            /// Begins construction. With no required fields declared, this
            /// is already the terminal stage.
            #[must_use]
            pub fn builder() -> BuildStep {
                BuildStep::from_required()
            }
        }
    };
    (@stages_entry $Entity:ident [ ($f1:ident: $t1:ty => $S1:ident) $($rest:tt)* ]) => {
        impl $Entity {
            /// Begins the staged builder. Each required field is supplied
            /// in declared order before the terminal stage is reachable.
            #[must_use]
            pub fn builder() -> $S1 {
                $S1 {}
            }
        }

        $crate::define_entity!(@stage $Entity [] ($f1: $t1 => $S1) $($rest)*);
    };
    (@stage $Entity:ident [ $(($pf:ident: $pt:ty))* ]
        ($f:ident: $t:ty => $S:ident) ($f2:ident: $t2:ty => $S2:ident) $($rest:tt)*) => {
        #[derive(Debug, Clone)]
        pub struct $S {
            $($pf: $pt,)*
        }

        impl $S {
            #[must_use]
            pub fn $f(self, $f: impl Into<$t>) -> $S2 {
                let Self { $($pf,)* } = self;
                $S2 {
                    $($pf,)*
                    $f: $f.into(),
                }
            }
        }

        $crate::define_entity!(@stage $Entity [ $(($pf: $pt))* ($f: $t) ] ($f2: $t2 => $S2) $($rest)*);
    };
    (@stage $Entity:ident [ $(($pf:ident: $pt:ty))* ] ($f:ident: $t:ty => $S:ident)) => {
        #[derive(Debug, Clone)]
        pub struct $S {
            $($pf: $pt,)*
        }

        impl $S {
            #[must_use]
            pub fn $f(self, $f: impl Into<$t>) -> BuildStep {
                let Self { $($pf,)* } = self;
                BuildStep::from_required($($pf,)* $f.into())
            }
        }
    };

    // ── Terminal stage and copy builder ──────────────────────────────

    (@late ($($ctx:tt)*) [ $($req:tt)* ] [ $($opt:tt)* ] [ $($ro:tt)* ]
        required $f:ident ($n:literal, $C:ident): $t:ty as $ft:ident => $S:ident; $($rest:tt)*) => {
        $crate::define_entity!(@late ($($ctx)*)
            [ $($req)* ($f, $t, $n) ] [ $($opt)* ] [ $($ro)* ] $($rest)*);
    };
    (@late ($($ctx:tt)*) [ $($req:tt)* ] [ $($opt:tt)* ] [ $($ro:tt)* ]
        optional $f:ident ($n:literal, $C:ident): $t:ty as $ft:ident; $($rest:tt)*) => {
        $crate::define_entity!(@late ($($ctx)*)
            [ $($req)* ] [ $($opt)* ($f, $t) ] [ $($ro)* ] $($rest)*);
    };
    (@late ($($ctx:tt)*) [ $($req:tt)* ] [ $($opt:tt)* ] [ $($ro:tt)* ]
        read_only $f:ident ($n:literal, $C:ident): $t:ty as $ft:ident; $($rest:tt)*) => {
        $crate::define_entity!(@late ($($ctx)*)
            [ $($req)* ] [ $($opt)* ] [ $($ro)* ($f, $t) ] $($rest)*);
    };
    (@late ($Entity:ident, $etype:literal, $id:ident)
        [ $(($rf:ident, $rt:ty, $rn:literal))* ]
        [ $(($of:ident, $ot:ty))* ]
        [ $(($gf:ident, $gt:ty))* ]) => {
        /// Terminal builder stage: optional fields in any order, an
        /// explicit identity, and `build()`.
        #[derive(Debug, Clone)]
        pub struct BuildStep {
            $id: Option<String>,
            $($rf: $rt,)*
            $($of: Option<$ot>,)*
        }

        impl BuildStep {
            fn from_required($($rf: $rt),*) -> Self {
                Self {
                    $id: None,
                    $($rf,)*
                    $($of: None,)*
                }
            }

            /// Uses `id` verbatim instead of generating one at build time.
            #[must_use]
            pub fn $id(mut self, $id: impl Into<String>) -> Self {
                self.$id = Some($id.into());
                self
            }

            $(
                #[must_use]
                pub fn $of(mut self, $of: impl Into<$ot>) -> Self {
                    self.$of = Some($of.into());
                    self
                }
            )*

            /// Assembles an immutable entity, generating a random identity
            /// when none was supplied. The builder is consumed; clone it
            /// first to fork independent snapshots.
            #[must_use]
            pub fn build(self) -> $Entity {
                self.build_with(&$crate::RandomIdentity)
            }

            /// Like `build`, with an explicit identity source.
            #[must_use]
            pub fn build_with<G>(self, ids: &G) -> $Entity
            where
                G: $crate::IdentitySource + ?Sized,
            {
                let identity = match self.$id {
                    Some(supplied) => supplied,
                    None => ids.generate(),
                };

                $Entity {
                    repr: Repr::Full(Fields {
                        $id: identity,
                        $($rf: self.$rf,)*
                        $($of: self.$of,)*
                        $($gf: None,)*
                    }),
                }
            }
        }

        impl $Entity {
            /// Seeds an unordered builder with every field of this entity,
            /// identity and persistence-owned fields included. The entity
            /// itself is never altered.
            #[must_use]
            pub fn copy_of_builder(&self) -> CopyOfBuilder {
                match &self.repr {
                    Repr::Full(fields) => CopyOfBuilder {
                        $id: fields.$id.clone(),
                        $($rf: Some(fields.$rf.clone()),)*
                        $($of: fields.$of.clone(),)*
                        $($gf: fields.$gf.clone(),)*
                    },
                    Repr::ReferenceOnly(reference) => CopyOfBuilder {
                        $id: reference.$id.clone(),
                        $($rf: None,)*
                        $($of: None,)*
                        $($gf: None,)*
                    },
                }
            }
        }

        /// Builder seeded from an existing entity. All setters are
        /// unordered since the staged sequence was already satisfied by
        /// the source; finalization re-validates the carried required
        /// fields instead.
        #[derive(Debug, Clone)]
        pub struct CopyOfBuilder {
            $id: String,
            $($rf: Option<$rt>,)*
            $($of: Option<$ot>,)*
            $($gf: Option<$gt>,)*
        }

        impl CopyOfBuilder {
            /// Replaces the identity carried from the source entity.
            #[must_use]
            pub fn $id(mut self, $id: impl Into<String>) -> Self {
                self.$id = $id.into();
                self
            }

            $(
                #[must_use]
                pub fn $rf(mut self, $rf: impl Into<$rt>) -> Self {
                    self.$rf = Some($rf.into());
                    self
                }
            )*

            $(
                #[must_use]
                pub fn $of(mut self, $of: impl Into<$ot>) -> Self {
                    self.$of = Some($of.into());
                    self
                }
            )*

            /// Produces a new entity sharing the source identity plus any
            /// overrides. Fails if a required field carried from the
            /// source is absent, which happens when the source was a
            /// reference-only entity.
            pub fn build(self) -> $crate::Result<$Entity> {
                Ok($Entity {
                    repr: Repr::Full(Fields {
                        $id: self.$id,
                        $($rf: self.$rf.ok_or_else(|| $crate::ModelError::MissingField {
                            entity_type: $etype.into(),
                            field: $rn.into(),
                        })?,)*
                        $($of: self.$of,)*
                        $($gf: self.$gf,)*
                    }),
                })
            }
        }
    };
}
