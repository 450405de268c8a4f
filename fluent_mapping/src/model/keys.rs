//! Attribute keys for each kind of mapping node.

use crate::attributes::Attribute;

macro_rules! attribute_keys {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident => $xml:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
        pub enum $name {
            $(
                #[doc = concat!("The `", $xml, "` attribute.")]
                $variant,
            )+
        }

        impl Attribute for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn xml_name(self) -> &'static str {
                match self {
                    $(Self::$variant => $xml,)+
                }
            }
        }
    };
}

attribute_keys! {
    /// Attributes of the `hibernate-mapping` root element.
    MappingAttr {
        Schema => "schema",
        DefaultCascade => "default-cascade",
        DefaultAccess => "default-access",
        DefaultLazy => "default-lazy",
        AutoImport => "auto-import",
        Namespace => "namespace",
        Assembly => "assembly",
    }
}

attribute_keys! {
    /// Attributes of a `class` element.
    ClassAttr {
        Table => "table",
        Schema => "schema",
        DiscriminatorValue => "discriminator-value",
        Lazy => "lazy",
        Mutable => "mutable",
        DynamicUpdate => "dynamic-update",
        DynamicInsert => "dynamic-insert",
        BatchSize => "batch-size",
        Where => "where",
        OptimisticLock => "optimistic-lock",
    }
}

attribute_keys! {
    /// Attributes of a `subclass` element.
    SubclassAttr {
        DiscriminatorValue => "discriminator-value",
        Lazy => "lazy",
        DynamicUpdate => "dynamic-update",
        DynamicInsert => "dynamic-insert",
        Abstract => "abstract",
    }
}

attribute_keys! {
    /// Attributes of an `id` element.
    IdAttr {
        Type => "type",
        Access => "access",
        UnsavedValue => "unsaved-value",
    }
}

attribute_keys! {
    /// Attributes of a `discriminator` element.
    DiscriminatorAttr {
        Column => "column",
        Type => "type",
        Length => "length",
        NotNull => "not-null",
        Force => "force",
        Insert => "insert",
        Formula => "formula",
    }
}

attribute_keys! {
    /// Attributes of a `property` element.
    PropertyAttr {
        Type => "type",
        Formula => "formula",
        Access => "access",
        Insert => "insert",
        Update => "update",
        UniqueKey => "unique-key",
        Lazy => "lazy",
        OptimisticLock => "optimistic-lock",
    }
}

attribute_keys! {
    /// Attributes of a `column` element.
    ColumnAttr {
        Name => "name",
        Length => "length",
        NotNull => "not-null",
        Unique => "unique",
        UniqueKey => "unique-key",
        SqlType => "sql-type",
        Index => "index",
        Check => "check",
        Default => "default",
        Precision => "precision",
        Scale => "scale",
    }
}

attribute_keys! {
    /// Attributes of a `many-to-one` element.
    ReferenceAttr {
        Class => "class",
        Cascade => "cascade",
        Fetch => "fetch",
        Lazy => "lazy",
        NotNull => "not-null",
        Unique => "unique",
        Insert => "insert",
        Update => "update",
        ForeignKey => "foreign-key",
        Access => "access",
        NotFound => "not-found",
        PropertyRef => "property-ref",
    }
}

attribute_keys! {
    /// Attributes shared by the `bag`, `set`, `list`, and `map` elements.
    CollectionAttr {
        Table => "table",
        Schema => "schema",
        Lazy => "lazy",
        Inverse => "inverse",
        Cascade => "cascade",
        Fetch => "fetch",
        OrderBy => "order-by",
        Where => "where",
        BatchSize => "batch-size",
        Access => "access",
        Mutable => "mutable",
    }
}

attribute_keys! {
    /// Attributes of a collection's `key` element.
    KeyAttr {
        ForeignKey => "foreign-key",
        OnDelete => "on-delete",
        PropertyRef => "property-ref",
        NotNull => "not-null",
        Update => "update",
    }
}

attribute_keys! {
    /// Attributes of a collection's `index` element.
    IndexAttr {
        Type => "type",
    }
}

attribute_keys! {
    /// Attributes of a `one-to-many` element.
    OneToManyAttr {
        NotFound => "not-found",
        EntityName => "entity-name",
    }
}

attribute_keys! {
    /// Attributes of a `many-to-many` element.
    ManyToManyAttr {
        Fetch => "fetch",
        Lazy => "lazy",
        NotFound => "not-found",
        Where => "where",
        OrderBy => "order-by",
        ForeignKey => "foreign-key",
    }
}
