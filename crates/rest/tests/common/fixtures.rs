//! Request payloads.

use serde_json::{Value, json};

/// A publishable document with one contact, in PascalCase.
pub fn single_contact() -> Value {
    json!({
        "Id": "TCnWpDVD",
        "ReportMetadata": {
            "Title": "Document for Publication > Best Report Yet!!",
            "ContactSection": [{
                "ContactInformation": [{
                    "ContactHeader": "Media Contact",
                    "Contacts": [{
                        "FirstName": "Mike",
                        "LastName": "Johnsen",
                        "Email": "mike.johnsen@example.com",
                        "Title": "Director of Communications & Marketing",
                        "PhoneNumber": "+1 646-731-1347",
                        "Accreditation": "CM&AA"
                    }]
                }]
            }]
        },
        "CountryIds": ["US"],
        "Title": "Document for Publication > Best Report Yet!!",
        "PublishDate": "2024-08-26T18:19:59Z",
        "Status": 3,
        "TestRun": true
    })
}

/// A publishable document with several contact blocks, in camelCase.
pub fn multiple_contacts() -> Value {
    json!({
        "id": "TCnWpDVD",
        "reportMetadata": {
            "title": "Document for Publication > Best Report Yet!!",
            "contactSection": [{
                "contactInformation": [
                    {
                        "contactHeader": "Media Contact",
                        "contacts": [
                            {
                                "firstName": "Mike",
                                "lastName": "Johnsen",
                                "title": "Director of Communications & Marketing",
                                "phoneNumber": "+1 646-731-1347"
                            },
                            {
                                "firstName": "",
                                "lastName": "",
                                "phoneNumber": ""
                            }
                        ]
                    },
                    {
                        "contactHeader": "Analytical Contacts",
                        "contacts": [
                            {
                                "firstName": "Fabio",
                                "lastName": "Camillo",
                                "title": "CTO",
                                "phoneNumber": "+1 777-731-1347"
                            },
                            {
                                "firstName": "Fabio 2",
                                "lastName": "Camillo 2",
                                "title": "CTO2",
                                "phoneNumber": "+1 777-888-1347"
                            }
                        ]
                    }
                ]
            }]
        },
        "countryIds": ["US", "BR"],
        "publishDate": "2024-08-26T18:19:59Z",
        "status": 3,
        "testRun": true
    })
}

/// [`single_contact`] with one top-level field replaced.
pub fn single_contact_with(key: &str, value: Value) -> Value {
    let mut body = single_contact();
    body[key] = value;
    body
}
