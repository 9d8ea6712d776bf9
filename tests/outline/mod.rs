mod tests_pseudo_al;
