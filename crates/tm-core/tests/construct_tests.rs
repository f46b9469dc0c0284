use pretty_assertions::assert_eq;
use tm_core::{
    build, build_dynamic, construct, construct_into, ArgSet, DynamicShape, FieldShape, Filled,
    FromFields, MatchError, Place, Vacant,
};

#[derive(Debug, Default, Clone, PartialEq)]
struct Name(String);

#[derive(Debug, Default, Clone, PartialEq)]
struct Age(u32);

#[derive(Debug, Default, Clone, PartialEq)]
struct Tags<T>(Vec<T>);

#[derive(Debug, PartialEq, FieldShape)]
struct Person<T: Clone> {
    name: Name,
    age: Age,
    tags: Tags<T>,
}

#[derive(Debug, PartialEq)]
struct Badge {
    line: String,
}

impl<T: Clone + std::fmt::Debug> FromFields<Person<T>> for Badge {
    fn from_fields(fields: Person<T>) -> Self {
        Self {
            line: format!("{} ({}) {:?}", fields.name.0, fields.age.0, fields.tags.0),
        }
    }
}

fn person(name: &str, age: u32, tags: &[&'static str]) -> Person<&'static str> {
    Person {
        name: Name(name.to_string()),
        age: Age(age),
        tags: Tags(tags.to_vec()),
    }
}

#[test]
fn supplied_fields_are_taken_and_missing_ones_defaulted() {
    let built = construct!(Person<&'static str>; Age(41));
    assert_eq!(built, person("", 41, &[]));
}

#[test]
fn zero_arguments_default_every_field() {
    let built = construct!(Person<u8>);
    assert_eq!(
        built,
        Person {
            name: Name::default(),
            age: Age::default(),
            tags: Tags::default(),
        }
    );
    assert_eq!(<Person<u8> as FieldShape>::FIELD_COUNT, 3);
}

#[test]
fn argument_order_does_not_matter() {
    let name = || Name("ada".into());
    let age = || Age(36);
    let tags = || Tags(vec!["math", "engines"]);
    let expected = person("ada", 36, &["math", "engines"]);

    assert_eq!(construct!(Person<&'static str>; name(), age(), tags()), expected);
    assert_eq!(construct!(Person<&'static str>; name(), tags(), age()), expected);
    assert_eq!(construct!(Person<&'static str>; age(), name(), tags()), expected);
    assert_eq!(construct!(Person<&'static str>; age(), tags(), name()), expected);
    assert_eq!(construct!(Person<&'static str>; tags(), name(), age()), expected);
    assert_eq!(construct!(Person<&'static str>; tags(), age(), name()), expected);
}

#[test]
fn arguments_are_moved_not_copied() {
    let tags = Tags(vec![String::from("owned")]);
    let pointer = tags.0.as_ptr();
    let built = construct!(Person<String>; tags);
    assert_eq!(built.tags.0.as_ptr(), pointer);
}

#[test]
fn place_and_finish_can_be_driven_by_hand() {
    let args = <Person<u8> as FieldShape>::args();
    let args: PersonArgs<u8, Vacant, Filled<Age>, Vacant> = Place::place(args, Age(3));
    let built = tm_core::Finish::finish(Place::place(args, Tags(vec![1u8, 2])));
    assert_eq!(built.age, Age(3));
    assert_eq!(built.tags, Tags(vec![1, 2]));
    assert_eq!(built.name, Name::default());
}

#[test]
fn target_built_through_from_fields() {
    let badge: Badge = construct_into!(Badge, Person<u8>; Tags(vec![7u8]), Name("kim".into()));
    assert_eq!(badge.line, "kim (0) [7]");

    let same: Badge = build(construct!(Person<u8>; Name("kim".into()), Tags(vec![7u8])));
    assert_eq!(same, badge);
}

#[test]
fn descriptors_follow_declaration_order() {
    let descriptors = <Person<u8> as DynamicShape>::descriptors();
    let names: Vec<_> = descriptors.iter().map(|d| d.name).collect();
    let positions: Vec<_> = descriptors.iter().map(|d| d.position).collect();
    assert_eq!(names, vec!["name", "age", "tags"]);
    assert_eq!(positions, vec![0, 1, 2]);
}

#[test]
fn dynamic_resolution_matches_static_resolution() {
    let args = ArgSet::new()
        .with(Tags(vec!["x"]))
        .with(Name("lin".into()));
    let dynamic = Person::<&'static str>::from_arg_set(args).unwrap();
    let fixed = construct!(Person<&'static str>; Name("lin".into()), Tags(vec!["x"]));
    assert_eq!(dynamic, fixed);
}

#[test]
fn dynamic_resolution_with_no_arguments() {
    let built = Person::<u8>::from_arg_set(ArgSet::new()).unwrap();
    assert_eq!(built, construct!(Person<u8>));
}

#[test]
fn dynamic_rejects_unrecognized_type() {
    // Tags<u16> is not a field of Person<u8>
    let args = ArgSet::new().with(Age(1)).with(Tags(vec![1u16]));
    let err = Person::<u8>::from_arg_set(args).unwrap_err();
    match err {
        MatchError::Unrecognized {
            position,
            type_name,
            ..
        } => {
            assert_eq!(position, 1);
            assert!(type_name.contains("Tags<u16>"), "{}", type_name);
        }
        other => panic!("expected Unrecognized, got {:?}", other),
    }
}

#[test]
fn dynamic_rejects_duplicate_type() {
    let args = ArgSet::new()
        .with(Age(1))
        .with(Name("a".into()))
        .with(Age(2));
    let err = build_dynamic::<Badge, Person<u8>>(args).unwrap_err();
    match err {
        MatchError::Duplicate {
            field,
            first,
            second,
            ..
        } => {
            assert_eq!(field, "age");
            assert_eq!((first, second), (0, 2));
        }
        other => panic!("expected Duplicate, got {:?}", other),
    }
}
