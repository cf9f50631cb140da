//! RFC 4512 description rendering for schema objects.

use super::{AttributeType, LdapSyntax, MatchingRule, ObjectClass, SchemaObjectHeader, UsageEnum};
use std::fmt;

fn write_names(f: &mut fmt::Formatter<'_>, names: &[String]) -> fmt::Result {
    match names {
        [] => Ok(()),
        [name] => write!(f, " NAME '{}'", name),
        _ => {
            f.write_str(" NAME (")?;
            for name in names {
                write!(f, " '{}'", name)?;
            }
            f.write_str(" )")
        }
    }
}

fn write_oids(f: &mut fmt::Formatter<'_>, keyword: &str, oids: &[String]) -> fmt::Result {
    match oids {
        [] => Ok(()),
        [oid] => write!(f, " {} {}", keyword, oid),
        _ => write!(f, " {} ( {} )", keyword, oids.join(" $ ")),
    }
}

fn write_header_start(f: &mut fmt::Formatter<'_>, header: &SchemaObjectHeader) -> fmt::Result {
    write!(f, "( {}", header.oid)?;
    write_names(f, &header.names)?;
    if let Some(description) = &header.description {
        write!(f, " DESC '{}'", description.replace('\'', "\\27"))?;
    }
    if header.obsolete {
        f.write_str(" OBSOLETE")?;
    }
    Ok(())
}

fn write_extensions(f: &mut fmt::Formatter<'_>, header: &SchemaObjectHeader) -> fmt::Result {
    for (key, values) in &header.extensions {
        match values.as_slice() {
            [value] => write!(f, " {} '{}'", key, value)?,
            _ => {
                write!(f, " {} (", key)?;
                for value in values {
                    write!(f, " '{}'", value)?;
                }
                f.write_str(" )")?;
            }
        }
    }
    f.write_str(" )")
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_header_start(f, &self.header)?;
        if let Some(superior) = &self.superior {
            write!(f, " SUP {}", superior)?;
        }
        if let Some(rule) = &self.equality {
            write!(f, " EQUALITY {}", rule)?;
        }
        if let Some(rule) = &self.ordering {
            write!(f, " ORDERING {}", rule)?;
        }
        if let Some(rule) = &self.substring {
            write!(f, " SUBSTR {}", rule)?;
        }
        if let Some(syntax) = &self.syntax {
            write!(f, " SYNTAX {}", syntax)?;
            if let Some(length) = self.syntax_length {
                write!(f, "{{{}}}", length)?;
            }
        }
        if self.single_valued {
            f.write_str(" SINGLE-VALUE")?;
        }
        if self.collective {
            f.write_str(" COLLECTIVE")?;
        }
        if !self.user_modifiable {
            f.write_str(" NO-USER-MODIFICATION")?;
        }
        if self.usage != UsageEnum::UserApplications {
            write!(f, " USAGE {}", self.usage)?;
        }
        write_extensions(f, &self.header)
    }
}

impl fmt::Display for ObjectClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_header_start(f, &self.header)?;
        write_oids(f, "SUP", &self.superiors)?;
        write!(f, " {}", self.kind)?;
        write_oids(f, "MUST", &self.must)?;
        write_oids(f, "MAY", &self.may)?;
        write_extensions(f, &self.header)
    }
}

impl fmt::Display for MatchingRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_header_start(f, &self.header)?;
        write!(f, " SYNTAX {}", self.syntax)?;
        write_extensions(f, &self.header)
    }
}

impl fmt::Display for LdapSyntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "( {}", self.header.oid)?;
        if let Some(description) = &self.header.description {
            write!(f, " DESC '{}'", description)?;
        }
        if !self.human_readable {
            f.write_str(" X-NOT-HUMAN-READABLE 'TRUE'")?;
        }
        write_extensions(f, &self.header)
    }
}
