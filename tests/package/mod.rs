mod tests_parse_json;
