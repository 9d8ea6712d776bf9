mod tests_graph;
mod tests_relation_grammar;
