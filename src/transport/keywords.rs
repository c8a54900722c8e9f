use crate::domain::CreateKeyword;

pub fn encode_create_keyword_form(request: &CreateKeyword) -> Vec<(String, String)> {
    let mut params = Vec::<(String, String)>::new();

    if let Some(shortcode) = request.shortcode.as_ref() {
        params.push((CreateKeyword::SHORTCODE_FIELD.to_owned(), shortcode.clone()));
    }
    if let Some(keyword) = request.keyword.as_ref() {
        params.push((CreateKeyword::KEYWORD_FIELD.to_owned(), keyword.clone()));
    }
    if let Some(mo_url) = request.mo_url.as_ref() {
        params.push((CreateKeyword::MO_URL_FIELD.to_owned(), mo_url.clone()));
    }
    if let Some(is_sticky) = request.is_sticky {
        params.push((
            CreateKeyword::IS_STICKY_FIELD.to_owned(),
            is_sticky.to_string(),
        ));
    }

    params
}
